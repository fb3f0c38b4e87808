//! Print a two-arm Beta chart as a plain table.
//!
//! Run: `cargo run --example two_arm_chart`

use bandit_curves::{build_curve_series, format_density, BetaParams, ChartLayout};

fn main() {
    let priors = vec![BetaParams::new("A", 1.0, 1.0), BetaParams::new("B", 1.0, 1.0)];
    let posteriors = vec![BetaParams::new("A", 4.0, 1.0), BetaParams::new("B", 2.0, 3.0)];

    let chart = match build_curve_series(&priors, &posteriors) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("cannot build chart: {e}");
            std::process::exit(1);
        }
    };

    let layout = ChartLayout::from_series(&chart);
    for s in &layout.series {
        let dash = match s.dash {
            Some((d, g)) => format!("dashed {d} {g}"),
            None => "solid".to_string(),
        };
        println!("{:<16} {} {}", s.key.as_str(), s.stroke.hex(), dash);
    }
    println!();

    print!("{:>6}", "x");
    for k in chart.keys() {
        print!(" {:>14}", k.as_str());
    }
    println!();
    for p in chart.points().iter().step_by(10) {
        print!("{:>6.2}", p.x);
        for (_, v) in p.iter() {
            print!(" {:>14}", format_density(v));
        }
        println!();
    }
}
