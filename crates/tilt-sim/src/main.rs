use anyhow::Context;
use clap::Parser;
use glam::Vec2;
use tilt_core::{SimHost, TiltConfig, TiltDriver, TiltHost};

/// Replay the profile card's tilt loop on a simulated frame clock.
#[derive(Parser, Debug)]
#[command(name = "tilt-sim", version, about)]
struct Args {
    /// Surface width in CSS pixels
    #[arg(long, default_value_t = 300.0)]
    width: f32,
    /// Surface height in CSS pixels
    #[arg(long, default_value_t = 420.0)]
    height: f32,
    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    /// Pretend the document has focus (keeps the loop alive at rest)
    #[arg(long)]
    focused: bool,
    /// After the entrance, sweep the pointer corner to corner over this many
    /// frames, then leave
    #[arg(long)]
    sweep: Option<u32>,
    /// Print every Nth frame
    #[arg(long, default_value_t = 4)]
    every: usize,
    /// Print full CSS variable lists instead of one summary line per frame
    #[arg(long)]
    css: bool,
    /// Entrance duration override (ms)
    #[arg(long)]
    initial_ms: Option<f64>,
    /// Stop after this many frames per phase
    #[arg(long, default_value_t = 2_000)]
    max_frames: usize,
}

struct Printer {
    every: usize,
    css: bool,
    frame: usize,
}

impl Printer {
    fn frame(&mut self, phase: &str, d: &TiltDriver<SimHost>) {
        self.frame += 1;
        if self.every == 0 || self.frame % self.every != 0 {
            return;
        }
        let Some(p) = d.host().last_applied() else {
            return;
        };
        let t = d.host().now_ms();
        if self.css {
            let vars = p
                .css_vars()
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join("; ");
            println!("{phase:<8} t={t:>7.1}ms {vars}");
        } else {
            let s = d.current();
            println!(
                "{phase:<8} t={t:>7.1}ms pos=({:>6.1},{:>6.1}) px={:>5.1}% py={:>5.1}% rx={:>6.2}deg ry={:>6.2}deg c={:.3}",
                s.x, s.y, p.pointer_x, p.pointer_y, p.rotate_x, p.rotate_y, p.pointer_from_center
            );
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let args = Args::parse();

    anyhow::ensure!(args.fps > 0.0, "fps must be positive (got {})", args.fps);
    let frame_ms = 1000.0 / args.fps;

    let mut config = TiltConfig::default();
    if let Some(ms) = args.initial_ms {
        config.initial_duration_ms = ms;
    }
    config.validate().context("invalid tilt config")?;

    let mut host = SimHost::new(args.width, args.height);
    host.focused = args.focused;
    let mut driver = TiltDriver::new(config, host);
    let mut out = Printer {
        every: args.every,
        css: args.css,
        frame: 0,
    };

    log::info!(
        "[sim] {}x{} surface at {:.0}fps, entrance {:.0}ms",
        args.width,
        args.height,
        args.fps,
        config.initial_duration_ms
    );
    driver.play_entrance();
    let entrance_end = config.initial_duration_ms;
    let mut frames = 0;
    while driver.host().now_ms() < entrance_end && frames < args.max_frames {
        if !driver.advance_frame(frame_ms) {
            break;
        }
        out.frame("entrance", &driver);
        frames += 1;
    }
    let s = driver.current();
    log::info!(
        "[sim] entrance done after {} frames, {:.2}px from rest",
        frames,
        s.distance_to_target()
    );

    if let Some(steps) = args.sweep {
        sweep(&mut driver, &mut out, steps.max(1), frame_ms, args.max_frames);
    } else {
        let settled = settle(&mut driver, &mut out, "settle", frame_ms, args.max_frames);
        log::info!("[sim] loop idle after {} more frames", settled);
    }
    Ok(())
}

fn sweep(
    d: &mut TiltDriver<SimHost>,
    out: &mut Printer,
    steps: u32,
    frame_ms: f64,
    max_frames: usize,
) {
    let size = d.host().size.unwrap_or(Vec2::ONE);
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let at = size * t;
        d.set_target(at.x, at.y);
        if d.advance_frame(frame_ms) {
            out.frame("track", d);
        }
    }

    log::info!("[sim] pointer left");
    d.to_center();
    let mut frames = 0;
    while !d.is_released() && frames < max_frames {
        if !d.advance_frame(frame_ms) {
            break;
        }
        out.frame("release", d);
        frames += 1;
    }
    log::info!("[sim] released after {} frames", frames);
    let settled = settle(d, out, "settle", frame_ms, max_frames);
    log::info!("[sim] loop idle after {} more frames", settled);
}

fn settle(
    d: &mut TiltDriver<SimHost>,
    out: &mut Printer,
    phase: &str,
    frame_ms: f64,
    max_frames: usize,
) -> usize {
    let mut frames = 0;
    while frames < max_frames && d.advance_frame(frame_ms) {
        out.frame(phase, d);
        frames += 1;
    }
    if d.engine().is_running() {
        log::warn!("[sim] still running after {} frames (focused?)", frames);
    }
    frames
}
