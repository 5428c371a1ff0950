impl<S, K> NavigationEngine<S, K>
where
    S: ControlSurface + ScrollRegion + KeyFocusHost,
    K: KeyProvider,
{
    fn apply_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Normal => self.apply_normal_key(key),
            Mode::ValueAdjust { index } => self.apply_value_adjust_key(index, key),
            Mode::ScrollLock { index } => self.apply_scroll_lock_key(index, key),
        }
    }

    fn apply_normal_key(&mut self, key: KeyEvent) {
        match key {
            KeyEvent::Up => self.step_focus(Direction::Up),
            KeyEvent::Down => self.step_focus(Direction::Down),
            KeyEvent::Enter => self.apply_enter(),
        }
    }

    /// One direction-key press in Normal mode. An adjacent control always
    /// wins; leftover scrollable content comes next; only a list with nothing
    /// further in that direction and a fully-scrolled (or absent) container
    /// wraps to the opposite end.
    fn step_focus(&mut self, dir: Direction) {
        if let Some(index) = self.registry.adjacent(dir) {
            self.registry.focus_index(&mut self.surface, index);
            self.pending_redraw = true;
            return;
        }

        if self.registry.has_container() {
            if let Some(metrics) = self.surface.scroll_metrics() {
                let step = self.config.scroll_step;
                let target = match dir {
                    Direction::Up => metrics.clamp_offset(metrics.offset.saturating_sub(step)),
                    Direction::Down => metrics.clamp_offset(metrics.offset.saturating_add(step)),
                };
                if target != metrics.offset {
                    self.surface.set_scroll_offset(target);
                    debug!("nav: scrolled past controls offset={}", target);
                    self.pending_redraw = true;
                    return;
                }
            } else {
                debug!("nav: container metrics unavailable, skipping scroll step");
            }
        }

        if let Some(index) = self.registry.wrap_target(dir) {
            self.registry.focus_index(&mut self.surface, index);
            self.pending_redraw = true;
            return;
        }

        self.warn_empty_once();
    }

    /// Enter in Normal mode. Scroll mode (when the backing region actually
    /// overflows) outranks value adjustment, which outranks the activation
    /// handlers in their fixed order. A control with no matching capability
    /// swallows the press; that is a no-op, not an error.
    fn apply_enter(&mut self) {
        let Some((index, spec)) = self.registry.focused_entry() else {
            self.warn_empty_once();
            return;
        };

        if spec.caps.contains(Capabilities::SCROLL_TOGGLE) && self.registry.has_container() {
            if let Some(metrics) = self.surface.scroll_metrics() {
                if metrics.overflows() {
                    self.mode = Mode::ScrollLock { index };
                    self.surface.scroll_mode_changed(spec.id, true);
                    debug!("nav: scroll mode entered id={}", spec.id.0);
                    self.pending_redraw = true;
                    return;
                }
            }
        }

        if spec.caps.contains(Capabilities::VALUE_ADJUST) {
            self.mode = Mode::ValueAdjust { index };
            debug!("nav: value adjust entered id={}", spec.id.0);
            self.pending_redraw = true;
            return;
        }

        if spec.caps.contains(Capabilities::ACTIVATE) {
            self.surface.activate(spec.id);
        } else if spec.caps.contains(Capabilities::TOGGLE) {
            self.surface.toggle(spec.id);
        } else if spec.caps.contains(Capabilities::ACTIVATED) {
            self.surface.activated(spec.id);
        } else {
            debug!("nav: enter ignored, control id={} has no handler", spec.id.0);
        }
    }

    fn apply_value_adjust_key(&mut self, index: usize, key: KeyEvent) {
        let Some(spec) = self.registry.control_at(index) else {
            warn!("nav: adjusted control vanished, back to normal mode");
            self.mode = Mode::Normal;
            return;
        };

        match key {
            KeyEvent::Up => {
                let value = self.surface.increase_value(spec.id);
                debug!("nav: value up id={} value={}", spec.id.0, value);
                self.pending_redraw = true;
            }
            KeyEvent::Down => {
                let value = self.surface.decrease_value(spec.id);
                debug!("nav: value down id={} value={}", spec.id.0, value);
                self.pending_redraw = true;
            }
            KeyEvent::Enter => {
                self.mode = Mode::Normal;
                debug!("nav: value adjust left id={}", spec.id.0);
                self.pending_redraw = true;
            }
        }
    }

    fn apply_scroll_lock_key(&mut self, index: usize, key: KeyEvent) {
        match key {
            KeyEvent::Enter => self.exit_scroll_lock(index),
            KeyEvent::Up | KeyEvent::Down => {
                let Some(metrics) = self.surface.scroll_metrics() else {
                    warn!("nav: container lost in scroll mode, back to normal");
                    self.exit_scroll_lock(index);
                    return;
                };
                let step = self.config.scroll_step;
                let target = match key {
                    KeyEvent::Up => metrics.clamp_offset(metrics.offset.saturating_sub(step)),
                    _ => metrics.clamp_offset(metrics.offset.saturating_add(step)),
                };
                if target != metrics.offset {
                    self.surface.set_scroll_offset(target);
                    self.pending_redraw = true;
                }
            }
        }
    }

    fn exit_scroll_lock(&mut self, index: usize) {
        self.mode = Mode::Normal;
        if let Some(spec) = self.registry.control_at(index) {
            self.surface.scroll_mode_changed(spec.id, false);
            debug!("nav: scroll mode left id={}", spec.id.0);
        }
        // Focus never moves while scroll mode is active, so the locked
        // control is still the focused one unless the list shrank under us.
        if self.registry.focused_entry().is_none() && !self.registry.is_empty() {
            self.registry.focus_index(&mut self.surface, 0);
        }
        self.pending_redraw = true;
    }

    fn warn_empty_once(&mut self) {
        if self.warned_empty {
            return;
        }
        self.warned_empty = true;
        warn!("nav: key pressed with nothing to navigate");
    }
}
