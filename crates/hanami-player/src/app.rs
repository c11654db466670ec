//! Player application implementing winit ApplicationHandler
//!
//! Owns the game world and drives it at the fixed simulation rate while
//! redrawing as fast as the surface allows.

use crate::hud;
use hanami_core::Vec2;
use hanami_render::{BlitPipeline, RenderContext, SceneRenderer};
use hanami_runtime::{GameClock, InputState};
use hanami_sim::{FrameInput, GameEvent, GameWorld};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

pub struct PlayerApp {
    // Core state
    world: GameWorld,
    clock: GameClock,
    input: InputState,
    scene_renderer: SceneRenderer,

    // Rendering
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    blit: Option<BlitPipeline>,

    // egui state
    egui_ctx: egui::Context,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,

    // Window options
    fullscreen: bool,
}

impl PlayerApp {
    pub fn new(world: GameWorld, scene_renderer: SceneRenderer, fullscreen: bool) -> Self {
        Self {
            world,
            clock: GameClock::new(),
            input: InputState::new(),
            scene_renderer,
            window: None,
            render_context: None,
            blit: None,
            egui_ctx: egui::Context::default(),
            egui_winit: None,
            egui_renderer: None,
            fullscreen,
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) {
        let playfield = self.world.scene().playfield;
        let window_attrs = Window::default_attributes()
            .with_title("Hanami")
            .with_inner_size(LogicalSize::new(
                playfield.width as f64,
                playfield.height as f64,
            ))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs).unwrap());

        if self.fullscreen {
            window.set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
        }

        let render_context = pollster::block_on(RenderContext::new(window.clone())).unwrap();

        let blit = BlitPipeline::new(
            &render_context.device,
            render_context.config.format,
            playfield.width as u32,
            playfield.height as u32,
        );

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &render_context.device,
            render_context.config.format,
            None,
            1,
            false,
        );

        self.window = Some(window);
        self.render_context = Some(render_context);
        self.blit = Some(blit);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);
    }

    /// Translate the accumulated raw input into one simulation step's input
    fn frame_input(&mut self) -> FrameInput {
        let playfield = self.world.scene().playfield;
        let (sx, sy) = match &self.render_context {
            Some(context) => (
                playfield.width as f64 / context.size.width.max(1) as f64,
                playfield.height as f64 / context.size.height.max(1) as f64,
            ),
            None => (1.0, 1.0),
        };

        FrameInput {
            clicks: self
                .input
                .drain_clicks()
                .into_iter()
                .map(|(x, y)| Vec2::new((x * sx) as f32, (y * sy) as f32))
                .collect(),
            move_left: self.input.is_action_pressed("move_left"),
            move_right: self.input.is_action_pressed("move_right"),
        }
    }

    fn tick(&mut self) {
        self.clock.tick();

        while self.clock.should_fixed_update() {
            let input = self.frame_input();
            self.world.advance_frame(&input);

            for event in self.world.drain_events() {
                match event {
                    GameEvent::PetalsSpawned { region, count } => {
                        println!("[sim] {count} petals from tree {region}");
                    }
                    GameEvent::LavaSpawned { count } => {
                        println!("[sim] {count} lava particles erupted");
                    }
                    GameEvent::BasketDestroyed => {
                        println!("[sim] basket destroyed by lava");
                    }
                    GameEvent::PetalCaught { .. } => {}
                }
            }

            self.clock.consume_fixed_step();
        }

        self.input.end_frame();
    }

    fn render(&mut self) {
        let Some(context) = &self.render_context else {
            return;
        };
        let Some(blit) = &self.blit else {
            return;
        };

        let frame = self.scene_renderer.render(&self.world);
        blit.upload(&context.queue, frame.pixels());

        let output = match context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return;
            }
            Err(e) => {
                eprintln!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        blit.render(&mut encoder, &view);
        self.render_hud(&mut encoder, &view);

        if let Some(context) = &self.render_context {
            context.queue.submit(std::iter::once(encoder.finish()));
        }
        output.present();
    }

    fn render_hud(&mut self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView) {
        let Some(window) = self.window.clone() else {
            return;
        };
        let Some(context) = &self.render_context else {
            return;
        };
        let Some(egui_winit) = &mut self.egui_winit else {
            return;
        };
        let Some(egui_renderer) = &mut self.egui_renderer else {
            return;
        };

        let raw_input = egui_winit.take_egui_input(&window);
        let score = self.world.score();
        let basket_alive = self.world.catcher.alive;

        let full_output = self
            .egui_ctx
            .run(raw_input, |ctx| hud::draw(ctx, score, basket_alive));

        egui_winit.handle_platform_output(&window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [context.config.width, context.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            egui_renderer.update_texture(&context.device, &context.queue, *id, image_delta);
        }

        egui_renderer.update_buffers(
            &context.device,
            &context.queue,
            encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("HUD Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut pass = pass.forget_lifetime();
            egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            egui_renderer.free_texture(id);
        }
    }
}

impl ApplicationHandler for PlayerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.initialize(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(egui_winit), Some(window)) = (&mut self.egui_winit, &self.window) {
            // The HUD is display-only; egui never consumes game input
            let _ = egui_winit.on_window_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(context) = &mut self.render_context {
                    context.resize(new_size);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => {
                            if key_code == KeyCode::Escape {
                                event_loop.exit();
                                return;
                            }
                            self.input.process_key_down(key_code);
                        }
                        ElementState::Released => {
                            self.input.process_key_up(key_code);
                        }
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input.process_mouse_move(position.x, position.y);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if state == ElementState::Pressed && button == MouseButton::Left {
                    self.input.process_click();
                }
            }

            WindowEvent::RedrawRequested => {
                self.tick();
                self.render();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
