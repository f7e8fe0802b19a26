use crate::controllers::interactive::config::{ConfigError, SchedulerConfig};
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::events::control::ControlEvent;
use crate::controllers::interactive::intake::{IntakeMessage, ResultIntake, run_intake};
use crate::controllers::interactive::ports::presenter::RenderEventPort;
use crate::controllers::interactive::resize::ResizeCoalescer;
use crate::controllers::interactive::shared_state::{SharedState, lock};
use crate::controllers::interactive::task::{RenderTask, TileSource};
use crate::core::data::image_properties::ImageProperties;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::util::calculate_worker_threads::calculate_worker_threads;
use crate::core::util::partition_tiles::partition_tiles;
use crossbeam_channel::Sender;
use log::{debug, error, info, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::thread::{self, JoinHandle};
use std::time::Instant;

#[derive(Debug)]
pub enum SchedulerError {
    Config(ConfigError),
    ThreadPool(rayon::ThreadPoolBuildError),
    IntakeThread(std::io::Error),
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{}", err),
            Self::ThreadPool(err) => write!(f, "could not start render workers: {}", err),
            Self::IntakeThread(err) => write!(f, "could not start result intake: {}", err),
        }
    }
}

impl Error for SchedulerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::ThreadPool(err) => Some(err),
            Self::IntakeThread(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SchedulerError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerAction {
    Submitted { generation: u64 },
    Coalesced,
    NothingToDo,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    pub generations_started: u64,
    pub tiles_dispatched: u64,
    pub tiles_discarded: u64,
}

/// Splits each render into tiles, runs them on a worker pool and assembles
/// the results on a dedicated intake thread.
///
/// Every render request starts a new generation. Tasks of older generations
/// are not interrupted; their results are discarded when they reach the
/// intake, so the framebuffer only ever holds pixels of a single generation.
/// Events go to the `RenderEventPort` from the intake thread.
pub struct RenderScheduler {
    shared: Arc<SharedState>,
    pool: ThreadPool,
    sender: Sender<IntakeMessage>,
    intake: Option<JoinHandle<()>>,
    tile_size: NonZeroU32,
    fractal: FractalKind,
    resize: ResizeCoalescer,
    last_request: Option<RenderRequest>,
}

impl RenderScheduler {
    pub fn new(
        config: &SchedulerConfig,
        presenter_port: Arc<dyn RenderEventPort>,
    ) -> Result<Self, SchedulerError> {
        let tile_size = config.tile_size()?;
        let worker_threads = calculate_worker_threads(config.worker_threads()?);

        let pool = ThreadPoolBuilder::new()
            .num_threads(worker_threads.get())
            .thread_name(|index| format!("render-worker-{}", index))
            .build()
            .map_err(SchedulerError::ThreadPool)?;

        let shared = Arc::new(SharedState::new(presenter_port, config.cache_capacity));
        let (sender, receiver) = crossbeam_channel::unbounded();

        let intake_shared = Arc::clone(&shared);
        let intake = thread::Builder::new()
            .name("render-intake".to_string())
            .spawn(move || run_intake(&receiver, &intake_shared))
            .map_err(SchedulerError::IntakeThread)?;

        info!(
            "Render scheduler started: {} workers, {}px tiles, cache capacity {}",
            worker_threads, tile_size, config.cache_capacity
        );

        Ok(Self {
            shared,
            pool,
            sender,
            intake: Some(intake),
            tile_size,
            fractal: FractalKind::default(),
            resize: ResizeCoalescer::new(),
            last_request: None,
        })
    }

    /// Starts a generation for `properties` at `viewport` using the current
    /// fractal, or defers it while a resize is in progress.
    pub fn request_render(
        &mut self,
        properties: ImageProperties,
        viewport: Viewport,
    ) -> SchedulerAction {
        let request = RenderRequest {
            fractal: self.fractal,
            properties,
            viewport,
        };

        if self.resize.is_resizing() {
            debug!(
                "Resize in progress, deferring {}x{} render",
                viewport.width(),
                viewport.height()
            );
            self.resize.defer(request);
            return SchedulerAction::Coalesced;
        }

        self.start_generation(request)
    }

    pub fn on_resize_start(&mut self) {
        debug!("Resize started");
        self.resize.begin();
    }

    /// Starts one generation for the newest request deferred during the resize.
    pub fn on_resize_end(&mut self) -> SchedulerAction {
        lock(&self.shared.cache).clear();

        match self.resize.finish() {
            Some(request) => {
                debug!("Resize ended");
                self.start_generation(request)
            }
            None => {
                debug!("Resize ended with nothing to render");
                SchedulerAction::NothingToDo
            }
        }
    }

    pub fn handle(&mut self, event: ControlEvent) -> SchedulerAction {
        match event {
            ControlEvent::Render {
                properties,
                viewport,
            } => self.request_render(properties, viewport),
            ControlEvent::ResizeStarted => {
                self.on_resize_start();
                SchedulerAction::NothingToDo
            }
            ControlEvent::ResizeEnded => self.on_resize_end(),
            ControlEvent::FractalChanged(fractal) => {
                self.set_fractal(fractal);

                match self.latest_request() {
                    Some(request) => self.request_render(request.properties, request.viewport),
                    None => SchedulerAction::NothingToDo,
                }
            }
            ControlEvent::ColourShiftChanged(colour_shift) => {
                let Some(request) = self.latest_request() else {
                    return SchedulerAction::NothingToDo;
                };

                match request.properties.with_colour_shift(colour_shift) {
                    Ok(properties) => self.request_render(properties, request.viewport),
                    Err(err) => {
                        warn!("Ignoring colour shift change: {}", err);
                        SchedulerAction::NothingToDo
                    }
                }
            }
        }
    }

    /// Takes effect from the next request.
    pub fn set_fractal(&mut self, fractal: FractalKind) {
        self.fractal = fractal;
    }

    #[must_use]
    pub fn fractal(&self) -> FractalKind {
        self.fractal
    }

    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.shared.generation.current()
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    /// The most recently completed frame.
    #[must_use]
    pub fn framebuffer(&self) -> Option<Arc<PixelBuffer>> {
        lock(&self.shared.latest_frame).clone()
    }

    #[must_use]
    pub fn stats(&self) -> SchedulerStats {
        let counters = &self.shared.counters;

        SchedulerStats {
            generations_started: counters.generations_started.load(Ordering::Relaxed),
            tiles_dispatched: counters.tiles_dispatched.load(Ordering::Relaxed),
            tiles_discarded: counters.tiles_discarded.load(Ordering::Relaxed),
        }
    }

    /// A handle onto the result intake, the only way into the framebuffer.
    #[must_use]
    pub fn result_intake(&self) -> ResultIntake {
        ResultIntake::new(self.sender.clone())
    }

    pub fn shutdown(&mut self) {
        let Some(handle) = self.intake.take() else {
            return;
        };

        let _ = self.sender.send(IntakeMessage::Shutdown);

        if handle.join().is_err() {
            error!("Result intake panicked");
        }

        debug!("Render scheduler shut down");
    }

    fn latest_request(&self) -> Option<RenderRequest> {
        self.resize.pending().copied().or(self.last_request)
    }

    fn start_generation(&mut self, request: RenderRequest) -> SchedulerAction {
        let generation = self.shared.generation.advance();
        let started = Instant::now();

        self.shared
            .counters
            .generations_started
            .fetch_add(1, Ordering::Relaxed);
        self.last_request = Some(request);

        let (exact, recolourable) = {
            let cache = lock(&self.shared.cache);
            (cache.find_exact(&request), cache.find_recolourable(&request))
        };

        if let Some(cached) = exact {
            debug!("Generation {} served from cache", generation);
            self.send(IntakeMessage::Replay {
                generation,
                cached,
                started,
            });
            return SchedulerAction::Submitted { generation };
        }

        let source = match recolourable {
            Some(cached) => TileSource::Recolour(Arc::clone(&cached.escapes)),
            None => TileSource::Iterate(request.fractal),
        };

        let tiles = partition_tiles(request.viewport, self.tile_size);

        debug!(
            "Generation {}: {} {}x{}, {} tiles{}",
            generation,
            request.fractal.display_name(),
            request.viewport.width(),
            request.viewport.height(),
            tiles.len(),
            if matches!(source, TileSource::Recolour(_)) { " (recolour)" } else { "" }
        );

        // The intake has to know the plan before any tile can arrive.
        self.send(IntakeMessage::Begin {
            generation,
            request,
            tiles: tiles.clone(),
            started,
        });

        self.shared
            .counters
            .tiles_dispatched
            .fetch_add(tiles.len() as u64, Ordering::Relaxed);

        let properties = Arc::new(request.properties);

        for (tile_index, tile) in tiles.into_iter().enumerate() {
            let task = RenderTask::new(
                self.result_intake(),
                generation,
                tile_index,
                tile,
                request.viewport,
                Arc::clone(&properties),
                source.clone(),
            );

            self.pool.spawn(move || task.run());
        }

        SchedulerAction::Submitted { generation }
    }

    fn send(&self, message: IntakeMessage) {
        if self.sender.send(message).is_err() {
            error!("Result intake has stopped");
        }
    }
}

impl Drop for RenderScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
