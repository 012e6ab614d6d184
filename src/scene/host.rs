//! Scene host: the main-loop state machine
//!
//! ```text
//!            start()                  update() -> "game"
//! NoScene ------------> Active(menu) --------------------> Active(game)
//!                            |
//!                            | quit / Escape / Q / "exit" / error
//!                            v
//!                       ShuttingDown
//! ```
//!
//! Each frame polls at most one event. The loop is render-driven: `update`
//! and `render` run every frame whether or not input arrived.

use super::{Destination, Scene, SceneFactory, SceneId};
use crate::error::ShellError;
use crate::input_system::{EventSource, InputEvent};
use crate::render::RenderContext;
use std::marker::PhantomData;

pub enum HostState<S> {
    NoScene,
    Active { id: SceneId, scene: S },
    ShuttingDown,
}

pub struct SceneHost<R: RenderContext, F: SceneFactory<R>> {
    factory: F,
    start_scene: SceneId,
    state: HostState<F::Scene>,
    _context: PhantomData<fn(&mut R)>,
}

impl<R: RenderContext, F: SceneFactory<R>> SceneHost<R, F> {
    pub fn new(factory: F, start_scene: SceneId) -> Self {
        SceneHost {
            factory,
            start_scene,
            state: HostState::NoScene,
            _context: PhantomData,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &HostState<F::Scene> {
        &self.state
    }

    #[cfg(test)]
    pub fn active_scene(&self) -> Option<SceneId> {
        match &self.state {
            HostState::Active { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.state, HostState::ShuttingDown)
    }

    /// Builds and initializes the starting scene
    pub fn start(&mut self, ctx: &mut R) -> Result<(), ShellError> {
        if !matches!(self.state, HostState::NoScene) {
            return Ok(());
        }
        log::info!("Starting in scene {}", self.start_scene);
        self.activate(ctx, self.start_scene)
    }

    /// Runs one frame: input, update, transition, render, present
    pub fn frame(&mut self, ctx: &mut R, event: Option<InputEvent>) -> Result<(), ShellError> {
        let (id, scene) = match &mut self.state {
            HostState::Active { id, scene } => (*id, scene),
            _ => return Ok(()),
        };

        if let Some(event) = event {
            if event.is_quit_request() {
                log::info!("Quit requested ({:?})", event);
                self.shutdown(ctx);
                return Ok(());
            }
            scene.handle_event(&event);
        }

        // An empty request is the same as no request
        if let Some(next) = scene.update().filter(|next| !next.is_empty()) {
            log::info!("Next scene is {}", next);
            match next.parse::<Destination>() {
                Ok(Destination::Exit) => {
                    self.shutdown(ctx);
                    return Ok(());
                }
                Ok(Destination::Scene(next_id)) => {
                    self.teardown(ctx);
                    self.activate(ctx, next_id)?;
                }
                Err(e) => {
                    log::error!("Scene {} requested an unknown destination", id);
                    self.shutdown(ctx);
                    return Err(e);
                }
            }
        }

        if let HostState::Active { id, scene } = &mut self.state {
            if let Err(source) = scene.render(ctx) {
                let scene = *id;
                self.shutdown(ctx);
                return Err(ShellError::SceneRender { scene, source });
            }
            ctx.present();
        }

        Ok(())
    }

    /// Drives frames until shutdown. Any error shuts the host down first.
    pub fn run<E: EventSource>(&mut self, ctx: &mut R, events: &mut E) -> Result<(), ShellError> {
        self.start(ctx)?;

        while self.is_running() {
            let event = events.poll();
            self.frame(ctx, event)?;
        }

        log::info!("Scene host stopped");
        Ok(())
    }

    /// Destroys the active scene, if any, and stops the host
    pub fn shutdown(&mut self, ctx: &mut R) {
        self.teardown(ctx);
        self.state = HostState::ShuttingDown;
    }

    fn teardown(&mut self, ctx: &mut R) {
        if let HostState::Active { id, mut scene } =
            std::mem::replace(&mut self.state, HostState::NoScene)
        {
            log::debug!("Destroying scene {}", id);
            scene.destroy(ctx);
        }
    }

    fn activate(&mut self, ctx: &mut R, id: SceneId) -> Result<(), ShellError> {
        let mut scene = self.factory.build(id);

        if let Err(source) = scene.init(ctx) {
            scene.destroy(ctx);
            self.state = HostState::ShuttingDown;
            return Err(ShellError::SceneInit { scene: id, source });
        }

        log::debug!("Scene {} initialized", id);
        self.state = HostState::Active { id, scene };
        Ok(())
    }
}
