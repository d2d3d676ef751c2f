use std::path::Path;

use console::Style;
use duotone_core::pipeline::config::PipelineConfig;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_run_summary(config: &PipelineConfig, input: &Path, outputs: &[&Path]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Duotone Pipeline"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Resize"),
        s.value.apply_to(format!(
            "longest \u{2264} {}, shortest \u{2265} {}",
            config.resize.max_longest_edge, config.resize.min_shortest_edge
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Contrast"),
        s.value.apply_to(config.contrast_factor)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dark"),
        s.value.apply_to(config.dark_color)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Light"),
        s.value.apply_to(config.light_color)
    );
    for (i, path) in outputs.iter().enumerate() {
        let label = if i == 0 { "Output" } else { "" };
        println!(
            "  {:<14}{}",
            s.label.apply_to(label),
            s.path.apply_to(path.display())
        );
    }
    println!();
}
