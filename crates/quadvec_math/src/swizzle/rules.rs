//! Swizzle pattern rules
//!
//! Shared by the build script, which generates the named accessors, and by
//! the library, which exposes the same rules for runtime swizzling. Keep this
//! file free of `crate::` paths so it compiles in both places.

/// Component letters in index order
pub const COMPONENTS: [char; 4] = ['x', 'y', 'z', 'w'];

/// Shortest pattern that gets a named accessor
pub const MIN_PATTERN_LEN: usize = 2;

/// Longest pattern that gets a named accessor
pub const MAX_PATTERN_LEN: usize = 4;

/// True if a pattern can be assigned through
///
/// Writing is only unambiguous when every component index appears once.
pub fn is_writable(indices: &[usize]) -> bool {
    indices
        .iter()
        .enumerate()
        .all(|(i, index)| !indices[..i].contains(index))
}

/// An ordered selection of component indices
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwizzlePattern {
    indices: Vec<usize>,
}

impl SwizzlePattern {
    /// Component indices in output order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of components selected
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always false for generated patterns
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Read accessor name, e.g. `zwxy`
    pub fn name(&self) -> String {
        self.indices.iter().map(|&i| COMPONENTS[i]).collect()
    }

    /// Write accessor name, e.g. `set_zwxy`
    pub fn setter_name(&self) -> String {
        format!("set_{}", self.name())
    }

    /// See [`is_writable`]
    pub fn is_writable(&self) -> bool {
        is_writable(&self.indices)
    }
}

/// Every pattern of `len` components, repetition allowed
///
/// Ordered like an odometer over `x, y, z, w`, so `xx, xy, .., ww`.
pub fn patterns(len: usize) -> impl Iterator<Item = SwizzlePattern> {
    let count = COMPONENTS.len().pow(len as u32);
    (0..count).map(move |mut n| {
        let mut indices = vec![0; len];
        for slot in indices.iter_mut().rev() {
            *slot = n % COMPONENTS.len();
            n /= COMPONENTS.len();
        }
        SwizzlePattern { indices }
    })
}

/// Every pattern that gets a named accessor, shortest first
pub fn all_patterns() -> impl Iterator<Item = SwizzlePattern> {
    (MIN_PATTERN_LEN..=MAX_PATTERN_LEN).flat_map(patterns)
}
