use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::progress_data::ProgressData;

/// Notifications sent to the presentation side. Once superseded, a generation
/// produces no further events.
#[derive(Debug, Clone)]
pub enum RenderEvent {
    /// A tile of the current generation was written to the framebuffer.
    Progress(ProgressData),
    /// Every tile of the generation is in. Sent once per generation.
    Complete(FrameData),
}
