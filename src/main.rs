use std::path::PathBuf;

use anyhow::Context;
use sparkline::draw::svg::SvgDocument;
use sparkline::style::{Color, LineMode};
use sparkline::SparklineConfig;

/// Renders a toml request, or the demo data if none is given, as svg on stdout.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => SparklineConfig::load(&path)
            .with_context(|| format!("could not load {}", path.display()))?,
        None => demo(),
    };

    let plan = config.plan();
    let mut svg = SvgDocument::new(config.width, config.height);
    plan.draw(&mut svg);
    log::debug!("drew {} elements", svg.len());

    print!("{}", svg);
    Ok(())
}

fn demo() -> SparklineConfig {
    let mut config = SparklineConfig {
        samples: vec![
            298.0, 46.0, 87.0, 178.0, 446.0, 1167.0, 1855.0, 1543.0, 662.0, 1583.0,
        ],
        ..Default::default()
    };
    config.style.mode = LineMode::Split;
    config.style.split_left_color = Color::rgb(0x1e, 0x88, 0xe5);
    config.style.split_right_color = Color::rgb(0xbd, 0xbd, 0xbd);
    config.style.split_ratio = 0.6;
    config
}
