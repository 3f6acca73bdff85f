use triad_explorer::visualizer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n╭──────────────────────────────────────────╮");
    println!("│          triad matrix explorer           │");
    println!("│                                          │");
    println!("│ the genesis triad subdivides into three  │");
    println!("│ self-similar sub-triads per depth level; │");
    println!("│ leaf color tracks simulated mining       │");
    println!("│                                          │");
    println!("│ up / =    go one level deeper            │");
    println!("│ down / -  go one level shallower         │");
    println!("│ s         save a png snapshot            │");
    println!("│ esc       quit                           │");
    println!("╰──────────────────────────────────────────╯\n");

    visualizer::run()
}
