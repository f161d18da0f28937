//! Generates the swizzle accessors for `Vec4` and `IVec4`
//!
//! The output is a list of `swizzle_get!`/`swizzle_set!` invocations that
//! `src/swizzle/mod.rs` includes from `OUT_DIR`.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

#[allow(dead_code)]
#[path = "src/swizzle/rules.rs"]
mod rules;

use rules::{all_patterns, COMPONENTS};

/// Source type and the output type for patterns of length 2, 3 and 4
struct Target {
    source: &'static str,
    outputs: [&'static str; 3],
}

const TARGETS: [Target; 2] = [
    Target {
        source: "Vec4",
        outputs: ["Vec2", "Vec3", "Vec4"],
    },
    Target {
        source: "IVec4",
        outputs: ["IVec2", "IVec3", "IVec4"],
    },
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/swizzle/rules.rs");

    let mut code = String::new();
    for target in &TARGETS {
        generate_impl(&mut code, target).expect("Failed to format swizzle impl");
    }

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR not set"));
    fs::write(out_dir.join("swizzles.rs"), code).expect("Failed to write swizzles.rs");
}

fn generate_impl(code: &mut String, target: &Target) -> std::fmt::Result {
    writeln!(code, "impl {} {{", target.source)?;

    for pattern in all_patterns() {
        let output = target.outputs[pattern.len() - 2];
        let sources: Vec<char> = pattern.indices().iter().map(|&i| COMPONENTS[i]).collect();

        let getter_args: Vec<String> = sources.iter().map(|c| c.to_string()).collect();
        writeln!(
            code,
            "    swizzle_get!({}, {}, {});",
            pattern.name(),
            output,
            getter_args.join(", ")
        )?;

        if pattern.is_writable() {
            // Source component <- field of the assigned value at the same position
            let setter_args: Vec<String> = sources
                .iter()
                .zip(COMPONENTS)
                .map(|(source, field)| format!("{} => {}", source, field))
                .collect();
            writeln!(
                code,
                "    swizzle_set!({}, {}, {});",
                pattern.setter_name(),
                output,
                setter_args.join(", ")
            )?;
        }
    }

    writeln!(code, "}}")
}
