use anyhow::Context;
use clap::Parser;
use hgif_core::{
    AnimationDriver, AppState, AutoBandwidth, DemoConfig, DeviceKind, HudSink, ProgressStep,
    RecordingSurface, RenderPipeline, RepeatHandle, Strategy, SystemClock, TimerChange,
    UploadedImage,
};

const AUTO_TIMER_ID: i32 = 1;
const PROGRESS_TIMER_ID: i32 = 2;

/// Run the adaptive quality demo without a browser: frames are drawn onto a
/// recording surface and the HUD plus agent log are printed to stdout.
#[derive(Parser, Debug)]
#[command(name = "hgif-native")]
#[command(about = "Headless HGIF adaptive quality simulation")]
struct Args {
    /// Device profile: mobile, tablet, laptop or desktop
    #[arg(short, long, default_value = "desktop")]
    device: DeviceKind,

    /// Initial bandwidth in Mbps
    #[arg(short, long, default_value_t = 100.0)]
    bandwidth: f64,

    /// Drive bandwidth from the synthetic generator
    #[arg(long)]
    auto: bool,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u32,

    /// Simulated display refresh rate
    #[arg(long, default_value_t = 60.0)]
    refresh_hz: f64,

    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Seed for auto-mode jitter
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Simulate uploading a file with this name
    #[arg(long)]
    upload: Option<String>,

    /// MIME type reported for --upload
    #[arg(long, default_value = "image/png")]
    mime: String,
}

/// Fixed-interval timer on the simulated clock.
struct SimInterval {
    every_ms: f64,
    next_ms: f64,
    handle: RepeatHandle,
}

impl SimInterval {
    fn new(every_ms: i32) -> Self {
        Self {
            every_ms: f64::from(every_ms.max(1)),
            next_ms: 0.0,
            handle: RepeatHandle::default(),
        }
    }

    fn arm(&mut self, now_ms: f64, id: i32) {
        self.next_ms = now_ms + self.every_ms;
        if let Some(stale) = self.handle.arm(id) {
            log::debug!("[timer] replaced interval {stale}");
        }
    }

    fn disarm(&mut self) {
        if let Some(id) = self.handle.disarm() {
            log::debug!("[timer] cleared interval {id}");
        }
    }

    /// Number of firings due up to `now_ms`.
    fn due(&mut self, now_ms: f64) -> u32 {
        if !self.handle.is_armed() {
            return 0;
        }
        let mut n = 0;
        while self.next_ms <= now_ms {
            self.next_ms += self.every_ms;
            n += 1;
        }
        n
    }
}

/// Remembers the last strategy so only changes are printed.
#[derive(Default)]
struct ChangeHud {
    last: Option<Strategy>,
    changed: bool,
}

impl HudSink for ChangeHud {
    fn update_hud(&mut self, strategy: &Strategy) {
        self.changed = self.last.as_ref() != Some(strategy);
        self.last = Some(*strategy);
    }
}

fn print_hud(frame: u32, bw: f64, s: &Strategy) {
    println!(
        "frame {frame:>5}  {bw:>6.0} Mbps  layer {:<3}  {:<7} {:>3} fps  {:<8}  {}",
        s.layer, s.quality_label, s.fps, s.bitrate_label, s.codec_label
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    anyhow::ensure!(args.refresh_hz > 0.0, "--refresh-hz must be positive");

    let config = DemoConfig {
        initial_bandwidth_mbps: args.bandwidth,
        ..DemoConfig::default()
    };
    let mut app: AppState<String> = AppState::new(config, args.device, Box::new(SystemClock));
    app.agent.subscribe(|entry, _book| println!("  log {:<8} {entry}", entry.severity));
    log::info!(
        "hgif-native starting: device={} ({}) bandwidth={} Mbps",
        args.device,
        args.device.capability().display_name,
        args.bandwidth
    );

    let pipeline = RenderPipeline::standard(&app.config);
    let mut surface = RecordingSurface::new(args.width, args.height);
    let mut generator = AutoBandwidth::new(app.config.auto.clone(), args.seed);
    let mut auto_timer = SimInterval::new(app.config.auto.interval_ms);
    let mut progress_timer = SimInterval::new(app.config.progress_interval_ms);

    if args.auto && app.set_auto_mode(true) == TimerChange::Arm {
        auto_timer.arm(0.0, AUTO_TIMER_ID);
    }

    if let Some(name) = args.upload.as_deref() {
        if app.begin_upload(Some(args.mime.as_str())).is_ok() {
            app.image_decoded(UploadedImage::new(name.to_string(), 640.0, 480.0));
            progress_timer.arm(0.0, PROGRESS_TIMER_ID);
        }
    }

    let frame_ms = 1000.0 / args.refresh_hz;
    let mut driver = AnimationDriver::default();
    driver.start();
    let mut hud = ChangeHud::default();

    for frame in 0..args.frames {
        let now_ms = f64::from(frame) * frame_ms;

        for _ in 0..auto_timer.due(now_ms) {
            let sample = generator.sample(now_ms);
            app.auto_tick(sample);
        }
        for _ in 0..progress_timer.due(now_ms) {
            if app.advance_processing() == ProgressStep::Finished {
                progress_timer.disarm();
                break;
            }
        }

        driver.frame_requested(i32::try_from(frame).context("frame id overflow")?);
        surface.clear();
        let drawn = driver.tick(&app, &pipeline, &mut surface, &mut hud, now_ms / 1000.0);
        if let Some(s) = drawn.filter(|_| hud.changed) {
            print_hud(frame, app.bandwidth_mbps(), &s);
        }
    }

    if let Some(id) = driver.stop() {
        log::debug!("[frame] cancelled pending frame {id}");
    }
    auto_timer.disarm();
    progress_timer.disarm();

    if let Some(plan) = app.export_plan().filter(|_| app.can_export()) {
        println!(
            "export: {} {}x{} filter=\"{}\" ({})",
            plan.file_name, plan.width, plan.height, plan.filter, plan.mime
        );
        app.record_export();
    }
    log::info!(
        "simulated {} frames; last frame issued {} draw calls",
        driver.frames_drawn(),
        surface.commands.len()
    );
    Ok(())
}
