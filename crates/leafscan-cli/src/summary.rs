use console::Style;
use leafscan_core::detection::{Component, DetectionStats};
use leafscan_core::pipeline::LeafScanConfig;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    path: Style,
    empty: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
            empty: Style::new().dim().yellow(),
        }
    }
}

pub fn print_leaf_summary(
    config: &LeafScanConfig,
    width: usize,
    height: usize,
    stats: &DetectionStats,
    leaves: &[Component],
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Leaf Scan"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(9)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Grid"),
        s.value.apply_to(format!("{width}x{height}"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size range"),
        s.value.apply_to(format!(
            "{}..={}{}",
            config.detection.min_size,
            config.detection.max_size,
            if config.detection.iqr_filter { " + IQR" } else { "" }
        ))
    );
    println!();

    println!("  {}", s.header.apply_to("Statistics"));
    for line in stats.to_string().lines() {
        println!("    {line}");
    }
    println!();

    if leaves.is_empty() {
        println!("  {}", s.empty.apply_to("No leaves detected"));
        return;
    }

    println!(
        "  {}",
        s.header
            .apply_to(format!("Top {} of {} leaves", leaves.len(), stats.component_count))
    );
    println!(
        "    {:>5}  {:>8}  {:>21}  {:>11}",
        "Rank", "Size", "Bounds", "Center"
    );
    println!("    {}", "-".repeat(51));
    for leaf in leaves {
        let bbox = leaf.bounding_box();
        let bounds = format!(
            "({},{})-({},{})",
            bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y
        );
        println!(
            "    {:>5}  {:>8}  {:>21}  {:>11}",
            leaf.rank().unwrap_or_default(),
            leaf.size(),
            bounds,
            leaf.center().to_string()
        );
    }
}
