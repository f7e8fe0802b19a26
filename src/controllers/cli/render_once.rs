use crate::controllers::interactive::config::SchedulerConfig;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::RenderEventPort;
use crate::controllers::interactive::scheduler::{RenderScheduler, SchedulerAction};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::image_properties::ImageProperties;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::FractalKind;
use crossbeam_channel::Sender;
use log::{debug, info};
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_EVENT_TIMEOUT: Duration = Duration::from_secs(60);

struct ChannelPresenterPort {
    sender: Sender<RenderEvent>,
}

impl RenderEventPort for ChannelPresenterPort {
    fn present(&self, event: RenderEvent) {
        let _ = self.sender.send(event);
    }
}

/// Renders a single frame through the scheduler and hands it to a file presenter.
pub struct RenderOnceController<P: FilePresenterPort> {
    presenter: P,
    config: SchedulerConfig,
    event_timeout: Duration,
    buffer: Option<Arc<PixelBuffer>>,
}

impl<P: FilePresenterPort> RenderOnceController<P> {
    pub fn new(presenter: P, config: SchedulerConfig) -> Self {
        Self {
            presenter,
            config,
            event_timeout: DEFAULT_EVENT_TIMEOUT,
            buffer: None,
        }
    }

    /// Longest wait for the next render event before giving up.
    #[must_use]
    pub fn with_event_timeout(mut self, event_timeout: Duration) -> Self {
        self.event_timeout = event_timeout;
        self
    }

    pub fn generate(
        &mut self,
        fractal: FractalKind,
        properties: ImageProperties,
        viewport: Viewport,
    ) -> Result<(), Box<dyn Error>> {
        let (sender, receiver) = crossbeam_channel::unbounded();
        let mut scheduler =
            RenderScheduler::new(&self.config, Arc::new(ChannelPresenterPort { sender }))?;
        scheduler.set_fractal(fractal);

        info!("Rendering {} set...", fractal.display_name());
        info!("Image size: {}x{}", viewport.width(), viewport.height());
        info!("Max iterations: {}", properties.max_iterations());

        let SchedulerAction::Submitted { generation } =
            scheduler.request_render(properties, viewport)
        else {
            return Err("render was not submitted".into());
        };

        let frame = loop {
            match receiver.recv_timeout(self.event_timeout)? {
                RenderEvent::Progress(progress) => debug!(
                    "Tiles: {}/{}",
                    progress.tiles_completed, progress.tiles_total
                ),
                RenderEvent::Complete(frame) if frame.generation == generation => break frame,
                RenderEvent::Complete(_) => {}
            }
        };

        info!("Duration: {:?}", frame.render_duration);

        self.buffer = Some(frame.pixel_buffer);

        Ok(())
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_deref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?
        }

        Ok(())
    }
}
