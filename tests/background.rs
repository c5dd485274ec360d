mod common;

use common::{approx_eq, RecordingSurface};
use dirttime_site::frame_loop::FrameLoop;
use dirttime_site::render_state::{OutputSize, RenderState, Viewport};
use dirttime_site::{BackgroundRenderer, PixelSurface};
use glam::Vec2;

fn desktop() -> Viewport {
    Viewport::new(1280.0, 720.0, 1.0)
}

#[test]
fn state_starts_centred() {
    let state = RenderState::new(desktop());
    assert_eq!(state.elapsed(), 0.0);
    assert_eq!(state.pointer(), Vec2::splat(0.5));
    assert_eq!(state.smoothed_pointer(), Vec2::splat(0.5));
    assert_eq!(
        state.output_size(),
        OutputSize {
            width: 1280,
            height: 720
        }
    );
}

#[test]
fn pointer_is_normalised_and_flipped() {
    let mut state = RenderState::new(desktop());
    state.pointer_moved(320.0, 180.0, &desktop());
    assert!(approx_eq(state.pointer().x, 0.25, 1e-6));
    assert!(approx_eq(state.pointer().y, 0.75, 1e-6));
    // Raw pointer only; the smoothed one waits for a frame.
    assert_eq!(state.smoothed_pointer(), Vec2::splat(0.5));

    state.pointer_moved(-40.0, 9000.0, &desktop());
    assert_eq!(state.pointer(), Vec2::new(0.0, 0.0));
}

#[test]
fn pointer_on_empty_viewport_is_ignored() {
    let mut state = RenderState::new(desktop());
    state.pointer_moved(10.0, 10.0, &Viewport::new(0.0, 0.0, 1.0));
    assert_eq!(state.pointer(), Vec2::splat(0.5));
}

#[test]
fn smoothing_converges_without_overshoot() {
    let mut state = RenderState::new(desktop());
    state.pointer_moved(1280.0, 0.0, &desktop()); // top-right: (1, 1)
    let target = state.pointer();

    let mut previous = state.smoothed_pointer();
    for step in 0..1000 {
        state.advance(step as f64 / 60.0);
        let now = state.smoothed_pointer();
        assert!(now.x >= previous.x && now.x <= target.x, "x overshoot at {step}");
        assert!(now.y >= previous.y && now.y <= target.y, "y overshoot at {step}");
        previous = now;
    }
    assert!(approx_eq(previous.x, target.x, 1e-5));
    assert!(approx_eq(previous.y, target.y, 1e-5));
}

#[test]
fn smoothing_moves_five_percent_per_frame() {
    let mut state = RenderState::new(desktop());
    state.pointer_moved(0.0, 720.0, &desktop()); // (0, 0)
    state.advance(0.016);
    assert!(approx_eq(state.smoothed_pointer().x, 0.475, 1e-6));
    assert!(approx_eq(state.smoothed_pointer().y, 0.475, 1e-6));
}

#[test]
fn elapsed_never_goes_backwards() {
    let mut state = RenderState::new(desktop());
    state.advance(5.0);
    state.advance(3.0);
    assert_eq!(state.elapsed(), 5.0);
    state.advance(f64::NAN);
    assert_eq!(state.elapsed(), 5.0);
    state.advance(5.5);
    assert_eq!(state.elapsed(), 5.5);
}

#[test]
fn pixel_ratio_is_capped_at_two() {
    assert_eq!(
        Viewport::new(400.0, 300.0, 3.0).surface_size(),
        OutputSize {
            width: 800,
            height: 600
        }
    );
    assert_eq!(
        Viewport::new(400.0, 300.0, 1.5).surface_size(),
        OutputSize {
            width: 600,
            height: 450
        }
    );
    assert_eq!(Viewport::new(400.0, 300.0, 0.0).pixel_ratio(), 1.0);
    assert_eq!(
        Viewport::new(0.0, 0.0, 2.0).surface_size(),
        OutputSize {
            width: 1,
            height: 1
        }
    );
}

#[test]
fn resize_updates_state_and_surface() {
    let mut renderer = BackgroundRenderer::new(RecordingSurface::default(), desktop());
    renderer.on_resize(&Viewport::new(800.0, 600.0, 2.0));

    assert_eq!(
        renderer.state().output_size(),
        OutputSize {
            width: 800,
            height: 600
        }
    );
    assert_eq!(
        renderer.surface().sizes,
        vec![
            OutputSize {
                width: 1280,
                height: 720
            },
            OutputSize {
                width: 1600,
                height: 1200
            },
        ]
    );
}

#[test]
fn frames_carry_uniforms() {
    let mut renderer = BackgroundRenderer::new(RecordingSurface::default(), desktop());
    renderer.on_pointer_move(0.0, 720.0, &desktop());

    assert!(renderer.frame(1.5));
    assert!(renderer.frame(1.6));

    let frames = &renderer.surface().frames;
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].time, 1.5);
    assert_eq!(frames[0].resolution, Vec2::new(1280.0, 720.0));
    assert!(frames[1].pointer.x < frames[0].pointer.x);
    assert_eq!(renderer.frames(), 2);
}

#[test]
fn stop_handle_ends_the_loop() {
    let mut renderer = BackgroundRenderer::new(RecordingSurface::default(), desktop());
    let stop = renderer.stop_handle();

    for i in 0..10 {
        assert!(renderer.frame(i as f64));
    }
    stop.stop();
    assert!(stop.is_stopped());
    assert!(!renderer.frame(11.0));
    assert!(!renderer.frame(12.0));

    assert_eq!(renderer.frames(), 10);
    assert_eq!(renderer.surface().frames.len(), 10);
    assert_eq!(renderer.state().elapsed(), 9.0);
}

#[test]
fn loop_can_stop_itself_mid_frame() {
    let mut frames = FrameLoop::new();
    let stop = frames.stop_handle();
    assert!(frames.tick(|| {}));
    assert!(!frames.tick(|| stop.stop()));
    assert!(!frames.is_running());
    assert_eq!(frames.frames(), 2);
}

#[test]
fn pixel_surface_rasterises_opaque_frames() {
    let mut renderer = BackgroundRenderer::new(PixelSurface::new(), Viewport::new(32.0, 18.0, 1.0));
    renderer.frame(3.25);

    let surface = renderer.surface();
    assert_eq!((surface.width(), surface.height()), (32, 18));
    assert_eq!(surface.as_rgba().len(), 32 * 18 * 4);
    assert!(surface.as_rgba().chunks(4).all(|px| px[3] == 255));
    assert_eq!(surface.pixel(32, 0), None);

    let first = surface.as_rgba().to_vec();
    let mut again = BackgroundRenderer::new(PixelSurface::new(), Viewport::new(32.0, 18.0, 1.0));
    again.frame(3.25);
    assert_eq!(again.surface().as_rgba(), &first[..]);
}

#[test]
fn pixel_surface_is_dark_with_warm_glow() {
    let mut renderer = BackgroundRenderer::new(PixelSurface::new(), Viewport::new(64.0, 64.0, 1.0));
    renderer.frame(0.0);
    let surface = renderer.surface();

    for px in surface.as_rgba().chunks(4) {
        assert!(px[0] < 40 && px[1] < 40 && px[2] < 40, "{px:?}");
    }
    // Glow centre sits at uv (0.7, 0.6): column 44, row 25 from the top.
    let warm = surface.pixel(44, 25).unwrap_or_default();
    assert!(warm[0] > warm[2], "{warm:?}");
}
