use crate::agent::Agent;
use crate::config::DemoConfig;
use crate::device::DeviceKind;
use crate::error::UploadError;
use crate::export::ExportPlan;
use crate::log_book::{Clock, Severity};
use crate::playback::{check_upload, PlaybackState, ProgressStep, UploadedImage};
use crate::strategy::Strategy;

/// What the host should do with the auto-mode interval after an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerChange {
    Keep,
    Arm,
    Disarm,
}

/// The single mutable application state. UI handlers and the animation
/// driver receive it explicitly; `I` is the host image handle.
pub struct AppState<I> {
    pub agent: Agent,
    pub playback: PlaybackState<I>,
    pub config: DemoConfig,
    device_kind: DeviceKind,
    auto_mode: bool,
}

impl<I> AppState<I> {
    pub fn new(config: DemoConfig, device_kind: DeviceKind, clock: Box<dyn Clock>) -> Self {
        let agent = Agent::with_clock(
            device_kind.capability(),
            config.initial_bandwidth_mbps,
            config.log_capacity,
            clock,
        );
        Self {
            agent,
            playback: PlaybackState::default(),
            config,
            device_kind,
            auto_mode: false,
        }
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.agent.strategy()
    }

    pub fn device_kind(&self) -> DeviceKind {
        self.device_kind
    }

    pub fn bandwidth_mbps(&self) -> f64 {
        self.agent.bandwidth_mbps
    }

    pub fn is_auto_mode(&self) -> bool {
        self.auto_mode
    }

    /// Manual slider input.
    pub fn set_bandwidth(&mut self, mbps: f64) {
        self.agent.bandwidth_mbps = mbps;
        self.agent
            .log(format!("Bandwidth changed: {mbps} Mbps"), Severity::Decision);
    }

    /// Preset button: forces manual control, then applies the preset value.
    pub fn apply_preset(&mut self, mbps: f64, label: &str) -> TimerChange {
        let change = self.set_auto_mode(false);
        self.agent.bandwidth_mbps = mbps;
        self.agent
            .log(format!("Preset selected: {label}"), Severity::Decision);
        change
    }

    pub fn select_device(&mut self, kind: DeviceKind) {
        self.device_kind = kind;
        self.agent.device = kind.capability();
        self.agent.log(
            format!("Device profile changed: {}", kind.capability().display_name),
            Severity::Info,
        );
    }

    /// Toggling to the current value is a no-op.
    pub fn set_auto_mode(&mut self, on: bool) -> TimerChange {
        if self.auto_mode == on {
            return TimerChange::Keep;
        }
        self.auto_mode = on;
        if on {
            self.agent.log("Auto AI Control: ON", Severity::Info);
            TimerChange::Arm
        } else {
            self.agent.log("Auto AI Control: OFF", Severity::Info);
            TimerChange::Disarm
        }
    }

    /// Apply a generated sample. Ignored (returns false) once auto mode is off,
    /// so a late timer callback cannot override manual input.
    pub fn auto_tick(&mut self, sample_mbps: f64) -> bool {
        if !self.auto_mode {
            return false;
        }
        self.agent.bandwidth_mbps = sample_mbps;
        true
    }

    /// Gate a picked or dropped file by MIME type. A rejection is logged once
    /// and leaves everything else untouched.
    pub fn begin_upload(&mut self, mime: Option<&str>) -> Result<(), UploadError> {
        check_upload(mime).map_err(|e| {
            log::warn!("[upload] rejected: {e}");
            self.agent
                .log("Error: unsupported file type", Severity::Error);
            e
        })
    }

    pub fn image_decoded(&mut self, image: UploadedImage<I>) {
        log::info!("[upload] decoded {}x{}", image.width, image.height);
        self.playback.load_image(image);
        self.agent
            .log("HGIF conversion engine: started", Severity::Decision);
    }

    pub fn image_decode_failed(&mut self) {
        let err = UploadError::DecodeFailed;
        log::warn!("[upload] {err}");
        self.agent
            .log("Error: the image could not be decoded", Severity::Error);
    }

    pub fn advance_processing(&mut self) -> ProgressStep {
        let step = self.playback.advance(self.config.progress_step);
        if step == ProgressStep::Finished {
            self.agent.log(
                "AI upscaling complete: playing at best quality",
                Severity::Decision,
            );
        }
        step
    }

    pub fn can_export(&self) -> bool {
        self.playback.can_export()
    }

    pub fn export_plan(&self) -> Option<ExportPlan> {
        self.playback
            .uploaded_image
            .as_ref()
            .map(ExportPlan::for_image)
    }

    pub fn record_export(&mut self) {
        self.agent
            .log("Exported the file in HGIF format", Severity::Info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState<()> {
        AppState::new(
            DemoConfig::default(),
            DeviceKind::Desktop,
            Box::new(|| "00:00:00".to_string()),
        )
    }

    fn messages(app: &AppState<()>) -> Vec<String> {
        app.agent
            .log_book()
            .iter()
            .map(|e| e.message.clone())
            .collect()
    }

    #[test]
    fn auto_mode_toggle_is_idempotent() {
        let mut a = app();
        assert_eq!(a.set_auto_mode(true), TimerChange::Arm);
        assert_eq!(a.set_auto_mode(true), TimerChange::Keep);
        assert_eq!(a.set_auto_mode(false), TimerChange::Disarm);
        assert_eq!(messages(&a), ["Auto AI Control: OFF", "Auto AI Control: ON"]);
    }

    #[test]
    fn preset_turns_auto_off_and_applies_value() {
        let mut a = app();
        a.set_auto_mode(true);
        assert_eq!(a.apply_preset(25.0, "4G"), TimerChange::Disarm);
        assert!(!a.is_auto_mode());
        assert_eq!(a.bandwidth_mbps(), 25.0);
        assert!(!a.auto_tick(900.0));
        assert_eq!(a.bandwidth_mbps(), 25.0);
        assert_eq!(messages(&a)[0], "Preset selected: 4G");
    }

    #[test]
    fn rejected_upload_logs_one_error_and_keeps_state() {
        let mut a = app();
        let before = a.agent.log_book().len();
        assert!(a.begin_upload(Some("application/pdf")).is_err());
        assert_eq!(a.agent.log_book().len(), before + 1);
        assert_eq!(
            a.agent.log_book().latest().map(|e| e.severity),
            Some(Severity::Error)
        );
        assert!(a.playback.uploaded_image.is_none());
        assert!(!a.playback.is_processing());
    }

    #[test]
    fn export_requires_an_image() {
        let mut a = app();
        assert_eq!(a.export_plan(), None);
        a.image_decoded(UploadedImage::new((), 320.4, 240.0));
        assert!(!a.can_export());
        let plan = a.export_plan();
        assert_eq!(plan.as_ref().map(|p| (p.width, p.height)), Some((320, 240)));
        assert_eq!(plan.map(|p| p.file_name), Some("processed_image.hgif"));
    }

    #[test]
    fn select_device_updates_agent_capability() {
        let mut a = app();
        a.select_device(DeviceKind::Tablet);
        assert_eq!(a.device_kind(), DeviceKind::Tablet);
        assert_eq!(a.agent.device.display_name, "iPad Pro M2");
        assert_eq!(messages(&a)[0], "Device profile changed: iPad Pro M2");
    }
}
