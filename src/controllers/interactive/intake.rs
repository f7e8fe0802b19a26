use crate::controllers::interactive::cache::CachedRender;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::progress_data::ProgressData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::shared_state::{SharedState, lock};
use crate::core::actions::assemble_frame::frame_assembly::{
    AssembledFrame, DiscardReason, FrameAssembly, IntakeOutcome, TileResult,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, info, trace, warn};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

pub(crate) enum IntakeMessage {
    /// Sent before any task of the generation is spawned.
    Begin {
        generation: u64,
        request: RenderRequest,
        tiles: Vec<PixelRect>,
        started: Instant,
    },
    /// Completes a generation from an earlier identical render.
    Replay {
        generation: u64,
        cached: Arc<CachedRender>,
        started: Instant,
    },
    Tile(TileResult),
    Shutdown,
}

/// Where render tasks hand their finished tiles back. Every result goes
/// through here; nothing else writes the framebuffer.
#[derive(Clone)]
pub struct ResultIntake {
    sender: Sender<IntakeMessage>,
}

impl ResultIntake {
    pub(crate) fn new(sender: Sender<IntakeMessage>) -> Self {
        Self { sender }
    }

    /// Results arriving after the scheduler shut down are dropped.
    pub fn deliver(&self, result: TileResult) {
        if self.sender.send(IntakeMessage::Tile(result)).is_err() {
            trace!("Result intake closed, dropping tile");
        }
    }
}

struct ActiveGeneration {
    assembly: FrameAssembly,
    request: RenderRequest,
    started: Instant,
}

pub(crate) fn run_intake(receiver: &Receiver<IntakeMessage>, shared: &SharedState) {
    let mut active: Option<ActiveGeneration> = None;

    for message in receiver.iter() {
        match message {
            IntakeMessage::Begin {
                generation,
                request,
                tiles,
                started,
            } => {
                trace!("Intake tracking generation {} ({} tiles)", generation, tiles.len());
                active = Some(ActiveGeneration {
                    assembly: FrameAssembly::new(generation, request.viewport, tiles),
                    request,
                    started,
                });
            }
            IntakeMessage::Replay {
                generation,
                cached,
                started,
            } => {
                active = None;

                publish(
                    shared,
                    generation,
                    Arc::clone(&cached.pixel_buffer),
                    started.elapsed(),
                    None,
                );
            }
            IntakeMessage::Tile(result) => accept_tile(shared, active.as_mut(), result),
            IntakeMessage::Shutdown => break,
        }
    }

    debug!("Result intake stopped");
}

fn accept_tile(shared: &SharedState, active: Option<&mut ActiveGeneration>, result: TileResult) {
    let generation = result.generation;
    let tile_index = result.tile_index;

    let Some(current) = active.filter(|current| {
        generation == current.assembly.generation() && shared.generation.is_current(generation)
    }) else {
        discard(shared, generation, tile_index, DiscardReason::StaleGeneration);
        return;
    };

    let tiles_total = current.assembly.tiles_total();

    match current.assembly.accept(result) {
        IntakeOutcome::Discarded(reason) => discard(shared, generation, tile_index, reason),
        IntakeOutcome::Accepted {
            tiles_completed,
            tiles_total,
        } => {
            shared.presenter_port.present(RenderEvent::Progress(ProgressData {
                generation,
                tiles_completed,
                tiles_total,
            }));
        }
        IntakeOutcome::Completed(frame) => {
            shared.presenter_port.present(RenderEvent::Progress(ProgressData {
                generation,
                tiles_completed: tiles_total,
                tiles_total,
            }));

            complete(shared, current.request, current.started.elapsed(), frame);
        }
    }
}

fn complete(
    shared: &SharedState,
    request: RenderRequest,
    render_duration: Duration,
    frame: AssembledFrame,
) {
    let render = CachedRender {
        request,
        pixel_buffer: Arc::clone(&frame.pixel_buffer),
        escapes: frame.escapes,
    };

    publish(
        shared,
        frame.generation,
        frame.pixel_buffer,
        render_duration,
        Some(render),
    );
}

/// Makes a finished frame visible. `fresh` carries a newly assembled render
/// for the cache; replays pass `None`.
fn publish(
    shared: &SharedState,
    generation: u64,
    pixel_buffer: Arc<PixelBuffer>,
    render_duration: Duration,
    fresh: Option<CachedRender>,
) {
    // Checked once more right before anything becomes visible. A request
    // arriving after this point only starts the next generation, whose events
    // all pass through this thread after this one's completion.
    if !shared.generation.is_current(generation) {
        trace!("Generation {} superseded before completion", generation);
        return;
    }

    let from_cache = fresh.is_none();

    if let Some(render) = fresh {
        let mut cache = lock(&shared.cache);
        cache.insert(render);
        trace!("Cached generation {} ({} renders held)", generation, cache.len());
    }

    *lock(&shared.latest_frame) = Some(Arc::clone(&pixel_buffer));

    info!(
        "Generation {} complete: {}x{} in {:.2?}{}",
        generation,
        pixel_buffer.width(),
        pixel_buffer.height(),
        render_duration,
        if from_cache { " (cached)" } else { "" }
    );

    shared.presenter_port.present(RenderEvent::Complete(FrameData {
        generation,
        pixel_buffer,
        render_duration,
        from_cache,
    }));

    // Stored last: a reader seeing this generation also sees its event and frame.
    shared
        .last_completed_generation
        .store(generation, Ordering::Release);
}

fn discard(shared: &SharedState, generation: u64, tile_index: usize, reason: DiscardReason) {
    shared
        .counters
        .tiles_discarded
        .fetch_add(1, Ordering::Relaxed);

    match reason {
        DiscardReason::StaleGeneration | DiscardReason::AlreadyComplete => {
            trace!(
                "Discarded tile {} of generation {}: {:?}",
                tile_index, generation, reason
            );
        }
        DiscardReason::UnknownTile | DiscardReason::DuplicateTile | DiscardReason::Malformed => {
            warn!(
                "Rejected tile {} of generation {}: {:?}",
                tile_index, generation, reason
            );
        }
    }
}
