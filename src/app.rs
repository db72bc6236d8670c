//! Demo application state.
//!
//! A handful of drag controls, each adjusting its own number, plus a log of
//! the most recent deltas. The app owns the terminal's pointer capture host
//! and routes every crossterm event to the control it belongs to.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use tracing::{debug, info, warn};

use crate::adapters::TerminalPointerCapture;
use crate::config::{AppConfig, ControlConfig};
use crate::error::ConfigError;
use crate::gesture::{Axis, DragControl, DragControlConfig, DragDelta};
use crate::traits::{ControlId, PointerCapture};
use crate::ui::interaction::{HitAreaRegistry, PointerRouter, Route};

/// One line of the action log.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEntry {
    pub control: ControlId,
    pub label: String,
    pub delta: f64,
}

type ActionLog = Rc<RefCell<VecDeque<ActionEntry>>>;

/// A labelled number and the drag control adjusting it.
#[derive(Debug)]
pub struct DemoControl {
    label: String,
    initial: f64,
    value: Rc<Cell<f64>>,
    control: DragControl<Event>,
}

impl DemoControl {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> f64 {
        self.value.get()
    }

    pub fn control(&self) -> &DragControl<Event> {
        &self.control
    }
}

/// Demo state shared by the event loop and the renderer.
pub struct App<W: Write> {
    controls: Vec<DemoControl>,
    host: TerminalPointerCapture<W>,
    router: PointerRouter,
    /// Rebuilt by the renderer every frame
    pub hit_areas: HitAreaRegistry,
    actions: ActionLog,
    action_log_len: usize,
    focused: usize,
    next_id: u32,
    /// Settings that are saved back unchanged alongside the controls
    base_config: AppConfig,
    config_path: Option<PathBuf>,
    status: Option<String>,
    pub should_quit: bool,
}

impl<W: Write> App<W> {
    /// Build the demo from config, drawing pointer shapes through `writer`.
    pub fn new(config: &AppConfig, writer: W) -> Self {
        let mut app = Self {
            controls: Vec::with_capacity(config.controls.len()),
            host: TerminalPointerCapture::new(writer).with_pointer_shapes(config.pointer_shapes),
            router: PointerRouter::new(),
            hit_areas: HitAreaRegistry::new(),
            actions: Rc::new(RefCell::new(VecDeque::with_capacity(config.action_log_len))),
            action_log_len: config.action_log_len,
            focused: 0,
            next_id: 0,
            base_config: config.clone(),
            config_path: None,
            status: None,
            should_quit: false,
        };

        for control in &config.controls {
            let demo = app.build_control(
                control.label.clone(),
                control.drag_config(),
                control.initial,
                control.initial,
            );
            app.controls.push(demo);
        }

        app
    }

    /// Where `s` saves the current controls.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Outcome of the last save, shown in the title bar.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn controls(&self) -> &[DemoControl] {
        &self.controls
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Most recent deltas, oldest first.
    pub fn actions(&self) -> Vec<ActionEntry> {
        self.actions.borrow().iter().cloned().collect()
    }

    /// Control currently holding pointer capture.
    pub fn capture_owner(&self) -> Option<ControlId> {
        self.host.owner()
    }

    pub fn host(&self) -> &TerminalPointerCapture<W> {
        &self.host
    }

    fn build_control(
        &mut self,
        label: String,
        config: DragControlConfig,
        initial: f64,
        value: f64,
    ) -> DemoControl {
        self.next_id += 1;
        let id = ControlId::new(self.next_id);

        let cell = Rc::new(Cell::new(value));
        let sink = Rc::clone(&cell);
        let actions = Rc::clone(&self.actions);
        let capacity = self.action_log_len;
        let entry_label = label.clone();

        let control = DragControl::new(
            id,
            config,
            move |delta: DragDelta<'_, Event>| {
                sink.set(sink.get() + delta.value);

                if capacity == 0 {
                    return;
                }
                let mut log = actions.borrow_mut();
                while log.len() >= capacity {
                    log.pop_front();
                }
                log.push_back(ActionEntry {
                    control: id,
                    label: entry_label.clone(),
                    delta: delta.value,
                });
            },
        );

        DemoControl {
            label,
            initial,
            value: cell,
            control,
        }
    }

    /// Handle one terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Moved => {
                self.hit_areas.update_hover(mouse.column, mouse.row);
            }
            Event::FocusLost => {
                // The host learns first, then the control that held capture
                let owner = self.host.revoke();
                let routes = self.router.route(event, &self.hit_areas, owner);
                self.dispatch(routes, event);
            }
            _ => {
                let routes = self.router.route(event, &self.hit_areas, self.host.owner());
                self.dispatch(routes, event);
            }
        }
    }

    fn dispatch(&mut self, routes: Vec<Route>, event: &Event) {
        for Route { target, input } in routes {
            if let Some(demo) = self.controls.iter_mut().find(|c| c.control.id() == target) {
                demo.control.handle(&mut self.host, input, event);
            } else {
                debug!(control = %target, "pointer input for unknown control");
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            KeyCode::Char('x') => self.set_focused_axis(Axis::Horizontal),
            KeyCode::Char('y') => self.set_focused_axis(Axis::Vertical),
            KeyCode::Char('r') => self.reset_values(),
            KeyCode::Char('s') => self.save_controls(),
            _ => {}
        }
    }

    pub fn focus_next(&mut self) {
        if !self.controls.is_empty() {
            self.focused = (self.focused + 1) % self.controls.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.controls.is_empty() {
            self.focused = (self.focused + self.controls.len() - 1) % self.controls.len();
        }
    }

    /// Swap the focused control for a new one on `axis`.
    ///
    /// Axis is fixed per control, so the old control is released and
    /// replaced. The value carries over.
    pub fn set_focused_axis(&mut self, axis: Axis) {
        let Some(current) = self.controls.get(self.focused) else {
            return;
        };
        if current.control.axis() == axis {
            return;
        }

        let label = current.label.clone();
        let initial = current.initial;
        let value = current.value.get();
        let replacement =
            self.build_control(label, DragControlConfig::with_axis(axis), initial, value);

        let old = std::mem::replace(&mut self.controls[self.focused], replacement);
        let mut old_control = old.control;
        old_control.release(&mut self.host);

        info!(
            from = %old_control.id(),
            to = %self.controls[self.focused].control.id(),
            axis = %axis,
            "rebuilt drag control"
        );
    }

    /// Put every value back to its starting point and clear the log.
    pub fn reset_values(&mut self) {
        for demo in &self.controls {
            demo.value.set(demo.initial);
        }
        self.actions.borrow_mut().clear();
    }

    /// The configuration that would rebuild the current controls.
    pub fn control_configs(&self) -> Vec<ControlConfig> {
        self.controls
            .iter()
            .map(|demo| ControlConfig {
                label: demo.label.clone(),
                axis: demo.control.axis(),
                initial: demo.initial,
            })
            .collect()
    }

    /// Write the current controls to the config file.
    ///
    /// Other settings are saved as they were loaded. Returns the path
    /// written.
    pub fn save_config(&self) -> Result<PathBuf, ConfigError> {
        let path = self
            .config_path
            .clone()
            .ok_or_else(|| ConfigError::Invalid("no config path to save to".to_string()))?;

        let config = AppConfig {
            controls: self.control_configs(),
            ..self.base_config.clone()
        };
        config.save(&path)?;
        Ok(path)
    }

    fn save_controls(&mut self) {
        self.status = Some(match self.save_config() {
            Ok(path) => {
                info!("Saved controls to {:?}", path);
                format!("saved {}", path.display())
            }
            Err(e) => {
                warn!("Failed to save controls: {}", e);
                format!("save failed: {}", e)
            }
        });
    }
}
