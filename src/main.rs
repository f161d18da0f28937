//! QuadVec showcase
//!
//! Prints the results of the vector operations for the sample vectors listed
//! in the configuration.

use quadvec::config::{AppConfig, ShowcaseConfig};
use quadvec::{IVec4, Vec4};

/// Renders vectors with the configured format token
struct Printer {
    format: String,
}

impl Printer {
    fn real(&self, v: Vec4) -> String {
        if self.format.is_empty() {
            return v.to_string();
        }
        v.to_string_with(&self.format).unwrap_or_else(|e| {
            log::debug!("{}; using plain output for {}", e, v);
            v.to_string()
        })
    }

    fn int(&self, v: IVec4) -> String {
        if self.format.is_empty() {
            return v.to_string();
        }
        v.to_string_with(&self.format).unwrap_or_else(|e| {
            log::debug!("{}; using plain output for {}", e, v);
            v.to_string()
        })
    }
}

fn show_real(printer: &Printer, showcase: &ShowcaseConfig) {
    let vectors: Vec<Vec4> = showcase.vectors.iter().copied().map(Vec4::from).collect();

    for &v in &vectors {
        log::debug!("Real vector {:?}", v);
        println!("{}", printer.real(v));
        println!("  length        {}", v.length());
        println!("  normalized    {}", printer.real(v.normalized()));
        println!("  abs           {}", printer.real(v.abs()));
        println!("  floor / ceil  {} / {}", printer.real(v.floor()), printer.real(v.ceil()));
        println!("  round         {}", printer.real(v.round()));
        println!("  sign          {}", printer.real(v.sign()));
        println!("  snapped({})  {}", showcase.step, printer.real(v.snapped_scalar(showcase.step)));
        println!("  % {}          {}", showcase.modulus, printer.real(v % showcase.modulus));
        println!("  posmod({})    {}", showcase.modulus, printer.real(v.posmod_scalar(showcase.modulus)));
        println!("  max / min axis {} / {}", v.max_axis_index(), v.min_axis_index());
        println!("  truncated     {}", printer.int(v.trunc_to_ivec4()));
        println!("  wzyx          {}", printer.real(v.wzyx()));
        println!("  xw            {}", v.xw());
    }

    for pair in vectors.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        println!("{} -> {}", printer.real(a), printer.real(b));
        println!("  dot           {}", a.dot(b));
        println!("  distance      {}", a.distance_to(b));
        println!("  lerp({})    {}", showcase.weight, printer.real(a.lerp(b, showcase.weight)));
        println!("  direction     {}", printer.real(a.direction_to(b)));
        println!("  a < b         {}", a < b);
    }
}

/// False when some component of `a / b` or `a % b` would panic
fn divides_cleanly(a: IVec4, b: IVec4) -> bool {
    a.to_array()
        .into_iter()
        .zip(b.to_array())
        .all(|(x, y)| x.checked_div(y).is_some() && x.checked_rem(y).is_some())
}

fn show_int(printer: &Printer, showcase: &ShowcaseConfig) {
    let vectors: Vec<IVec4> = showcase.int_vectors.iter().copied().map(IVec4::from).collect();

    for &v in &vectors {
        log::debug!("Integer vector {:?}", v);
        println!("{}", printer.int(v));
        println!("  length        {}", v.length());
        println!("  abs           {}", printer.int(v.abs()));
        println!("  sign          {}", printer.int(v.sign()));
        println!("  as real       {}", printer.real(v.as_vec4()));
        println!("  max / min axis {} / {}", v.max_axis_index(), v.min_axis_index());
        println!("  wzyx          {}", printer.int(v.wzyx()));
    }

    for pair in vectors.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        println!("{} -> {}", printer.int(a), printer.int(b));
        println!("  distance      {}", a.distance_to(b));
        println!("  a < b         {}", a < b);
        if !divides_cleanly(a, b) {
            log::warn!("Skipping {} % {}: zero divisor or overflowing component", a, b);
        } else {
            println!("  a % b         {}", printer.int(a % b));
            println!("  a / b         {}", printer.int(a / b));
        }
    }
}

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    match &loaded {
        Ok(_) => log::info!("Loaded configuration"),
        Err(e) => log::warn!("Failed to load config: {}. Using defaults.", e),
    }

    let printer = Printer {
        format: config.display.format.clone(),
    };
    log::info!(
        "Showing {} real and {} integer vectors",
        config.showcase.vectors.len(),
        config.showcase.int_vectors.len()
    );

    show_real(&printer, &config.showcase);
    show_int(&printer, &config.showcase);
}
