use crate::controllers::render_loop::data::frame_data::FrameData;
use crate::controllers::render_loop::data::render_request::RenderRequest;
use crate::controllers::render_loop::ports::presenter::FramePresenterPort;
use crate::controllers::render_loop::render::render_frame;
use crate::core::actions::cancellation::GenerationToken;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use log::{debug, error};
use std::io;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn FramePresenterPort>,
}

impl SharedState {
    fn lock_latest(&self) -> MutexGuard<'_, Option<(u64, RenderRequest)>> {
        self.latest_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Renders submitted view snapshots on a background worker.
///
/// Only the newest request is kept: requests submitted while the worker is
/// busy replace one another, and a frame in flight is abandoned as soon as a
/// newer generation exists.
pub struct RenderLoop {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
    last_submitted: Option<RenderRequest>,
}

impl RenderLoop {
    /// Starts the worker thread. Fails only if the thread cannot be spawned.
    pub fn new(presenter_port: Arc<dyn FramePresenterPort>) -> io::Result<Self> {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name("render-loop".to_string())
            .spawn(move || {
                Self::worker_loop(&worker_shared);
            })?;

        Ok(Self {
            shared,
            worker: Some(worker),
            last_submitted: None,
        })
    }

    pub fn submit_request(&mut self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        *self.shared.lock_latest() = Some((generation, request));
        self.last_submitted = Some(request);
        self.shared.wake.notify_one();

        debug!(
            "submitted generation {} at {}x{}",
            generation, request.render_size.width, request.render_size.height
        );

        generation
    }

    /// Submits `request` unless it matches the previous submission.
    pub fn submit_if_changed(&mut self, request: RenderRequest) -> Option<u64> {
        if self.last_submitted.as_ref() == Some(&request) {
            return None;
        }

        Some(self.submit_request(request))
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    pub fn shutdown(&mut self) {
        {
            let _guard = self.shared.lock_latest();
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared.lock_latest();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token =
                GenerationToken::new(job_generation, &shared.generation, &shared.shutdown);

            let start = Instant::now();
            let result = render_frame(&request, &cancel_token);
            let render_duration = start.elapsed();

            match result {
                Ok(pixel_buffer) => {
                    if job_generation != shared.generation.load(Ordering::Acquire) {
                        debug!("discarding stale generation {}", job_generation);
                        continue;
                    }

                    debug!(
                        "generation {} rendered in {} ms",
                        job_generation,
                        render_duration.as_millis()
                    );

                    shared.presenter_port.present(FrameData {
                        generation: job_generation,
                        pixel_buffer,
                        render_duration,
                    });

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
                Err(GeneratePixelBufferError::Cancelled(_)) => {
                    debug!("abandoned generation {}", cancel_token.job());
                }
                Err(err) => {
                    error!("generation {} failed: {}", job_generation, err);
                }
            }
        }
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::pixel_size::PixelSize;
    use crate::core::data::view_state::ViewState;
    use std::time::Duration;

    #[derive(Default)]
    struct MockPresenterPort {
        frames: Mutex<Vec<FrameData>>,
    }

    impl MockPresenterPort {
        fn take_frames(&self) -> Vec<FrameData> {
            let mut guard = self.frames.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl FramePresenterPort for MockPresenterPort {
        fn present(&self, frame: FrameData) {
            self.frames.lock().unwrap().push(frame);
        }
    }

    fn wait_for_frames(sink: &MockPresenterPort, timeout: Duration) -> Vec<FrameData> {
        let start = Instant::now();
        loop {
            let frames = sink.take_frames();
            if !frames.is_empty() || start.elapsed() >= timeout {
                return frames;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn wait_for_generation(render_loop: &RenderLoop, generation: u64, timeout: Duration) {
        let start = Instant::now();
        while render_loop.last_completed_generation() < generation && start.elapsed() < timeout {
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn create_request(render_size: PixelSize, zoom: f64) -> RenderRequest {
        RenderRequest {
            view: ViewState::new(
                Complex {
                    real: -0.5,
                    imag: 0.0,
                },
                zoom,
                50,
            )
            .unwrap(),
            render_size,
        }
    }

    fn start() -> (Arc<MockPresenterPort>, RenderLoop) {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let render_loop =
            RenderLoop::new(Arc::clone(&presenter_port) as Arc<dyn FramePresenterPort>).unwrap();

        (presenter_port, render_loop)
    }

    #[test]
    fn test_submit_request_emits_frame() {
        let (presenter_port, mut render_loop) = start();
        let size = PixelSize::new(4, 4);

        let generation = render_loop.submit_request(create_request(size, 1.0));
        let frames = wait_for_frames(presenter_port.as_ref(), Duration::from_secs(2));

        assert_eq!(frames.len(), 1, "expected exactly one frame");
        assert_eq!(frames[0].generation, generation);
        assert_eq!(frames[0].pixel_buffer.size(), size);
        assert_eq!(frames[0].pixel_buffer.buffer().len(), 4 * 4 * 3);

        render_loop.shutdown();
    }

    #[test]
    fn test_generation_ids_increment() {
        let (presenter_port, mut render_loop) = start();
        let size = PixelSize::new(4, 4);

        let gen_a = render_loop.submit_request(create_request(size, 1.0));
        let frames_a = wait_for_frames(presenter_port.as_ref(), Duration::from_secs(2));
        let gen_b = render_loop.submit_request(create_request(size, 1.1));
        let frames_b = wait_for_frames(presenter_port.as_ref(), Duration::from_secs(2));

        assert_eq!(frames_a[0].generation, gen_a);
        assert_eq!(frames_b[0].generation, gen_b);
        assert!(gen_b > gen_a);

        render_loop.shutdown();
    }

    #[test]
    fn test_new_starts_worker() {
        let presenter_port = Arc::new(MockPresenterPort::default());

        let result = RenderLoop::new(Arc::clone(&presenter_port) as Arc<dyn FramePresenterPort>);

        let mut render_loop = match result {
            Ok(render_loop) => render_loop,
            Err(err) => panic!("render worker failed to start: {err}"),
        };
        assert!(render_loop.worker.is_some());
        assert_eq!(render_loop.last_completed_generation(), 0);

        let generation = render_loop.submit_request(create_request(PixelSize::new(2, 2), 1.0));
        wait_for_generation(&render_loop, generation, Duration::from_secs(2));
        assert_eq!(render_loop.last_completed_generation(), generation);

        render_loop.shutdown();
        assert!(render_loop.worker.is_none());
    }

    #[test]
    fn test_last_completed_generation_updates_after_frame() {
        let (presenter_port, mut render_loop) = start();

        let generation = render_loop.submit_request(create_request(PixelSize::new(4, 4), 1.0));
        let frames = wait_for_frames(presenter_port.as_ref(), Duration::from_secs(2));
        wait_for_generation(&render_loop, generation, Duration::from_secs(2));

        assert!(!frames.is_empty());
        assert_eq!(render_loop.last_completed_generation(), generation);

        render_loop.shutdown();
    }

    #[test]
    fn test_rapid_requests_coalesce_to_newest() {
        let (presenter_port, mut render_loop) = start();

        let mut last_gen = 0;
        for i in 0..5 {
            last_gen = render_loop.submit_request(create_request(PixelSize::new(64, 48), 1.0 + i as f64));
        }

        wait_for_generation(&render_loop, last_gen, Duration::from_secs(5));
        let frames = presenter_port.take_frames();

        assert_eq!(render_loop.last_completed_generation(), last_gen);
        assert!(!frames.is_empty());
        assert!(frames.len() <= 5);
        assert_eq!(frames.last().map(|f| f.generation), Some(last_gen));
        assert!(frames.windows(2).all(|w| w[0].generation < w[1].generation));

        render_loop.shutdown();
    }

    #[test]
    fn test_submit_if_changed_skips_identical_request() {
        let (_presenter_port, mut render_loop) = start();
        let request = create_request(PixelSize::new(4, 4), 1.0);

        let first = render_loop.submit_if_changed(request);
        let second = render_loop.submit_if_changed(request);
        let third = render_loop.submit_if_changed(create_request(PixelSize::new(4, 4), 2.0));

        assert_eq!(first, Some(1));
        assert_eq!(second, None);
        assert_eq!(third, Some(2));

        render_loop.shutdown();
    }

    #[test]
    fn test_frames_are_complete() {
        let (presenter_port, mut render_loop) = start();
        let size = PixelSize::new(7, 5);

        render_loop.submit_request(create_request(size, 1.0));
        let frames = wait_for_frames(presenter_port.as_ref(), Duration::from_secs(2));

        for frame in frames {
            assert_eq!(frame.pixel_buffer.buffer().len(), size.pixel_count() * 3);
        }

        render_loop.shutdown();
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let (_presenter_port, mut render_loop) = start();

        render_loop.shutdown();
        render_loop.shutdown();
    }
}
