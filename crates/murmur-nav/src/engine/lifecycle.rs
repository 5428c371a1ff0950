impl<S, K> NavigationEngine<S, K>
where
    S: ControlSurface + ScrollRegion + KeyFocusHost,
    K: KeyProvider,
{
    /// A screen or dialog became active and supplies its ordered controls
    /// (top to bottom as authored) plus at most one scrollable region.
    pub fn screen_became_active(
        &mut self,
        controls: &[ControlSpec],
        container: Option<ContainerId>,
    ) {
        self.leave_modal_mode();
        self.pending_rebuild = None;
        self.registry
            .initialize(&mut self.surface, controls, container);
        self.warned_empty = false;
        self.pending_redraw = true;
    }

    /// The active screen's content changed. The rebuild is deferred to the
    /// next tick so the host framework finishes laying out new elements
    /// before their bounds are read; a later request supersedes a pending
    /// one.
    pub fn screen_content_changed(
        &mut self,
        controls: &[ControlSpec],
        container: Option<ContainerId>,
    ) {
        let list = registry::bounded_list(controls);
        debug!("nav: rebuild deferred controls={}", list.len());
        self.pending_rebuild = Some(PendingRebuild {
            controls: list,
            container,
        });
    }

    /// Drop visual focus everywhere, e.g. while a full-screen takeover runs
    /// its own registry.
    pub fn clear_screen(&mut self) {
        self.leave_modal_mode();
        self.pending_rebuild = None;
        self.registry.clear(&mut self.surface);
        self.pending_redraw = true;
    }

    /// External focus request ("return focus to the button that opened the
    /// dialog"). Unknown ids are a logged no-op.
    pub fn focus_control(&mut self, id: ControlId) {
        self.leave_modal_mode();
        if self.registry.focus_id(&mut self.surface, id) {
            self.pending_redraw = true;
        }
    }

    /// Save the focused control's id before a modal takeover replaces the
    /// registry. Volatile; lives only until the matching restore.
    pub fn remember_focus_for_modal(&mut self) {
        self.focus_before_modal = self.registry.focused_entry().map(|(_, spec)| spec.id);
    }

    /// Re-focus the saved control once the opener's screen is registered
    /// again. A control that did not survive the rebuild keeps the rebuild
    /// default and logs.
    pub fn restore_focus_after_modal(&mut self) {
        let Some(id) = self.focus_before_modal.take() else {
            return;
        };
        self.focus_control(id);
    }

    /// Single event-loop entry point: applies a pending rebuild, drains the
    /// key provider and reasserts key-focus ownership at the configured
    /// cadence. Returns whether anything visual changed this tick.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        if let Some(pending) = self.pending_rebuild.take() {
            self.leave_modal_mode();
            self.registry
                .initialize(&mut self.surface, &pending.controls, pending.container);
            self.warned_empty = false;
            self.pending_redraw = true;
        }

        self.process_keys();
        self.poll_key_focus(now_ms);

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    fn process_keys(&mut self) {
        loop {
            match self.keys.poll_event() {
                Ok(Some(key)) => self.apply_key(key),
                Ok(None) => break,
                Err(_) => {
                    warn!("nav: key provider poll failed");
                    break;
                }
            }
        }
    }

    fn poll_key_focus(&mut self, now_ms: u64) {
        if now_ms < self.next_focus_poll_ms {
            return;
        }
        self.next_focus_poll_ms = now_ms.saturating_add(self.config.focus_poll_ms);
        if !self.surface.owns_key_focus() {
            debug!("nav: reclaiming key focus from host framework");
            self.surface.reclaim_key_focus();
        }
    }

    /// A modal sub-state cannot survive a registry change; its saved index
    /// would go stale. A control still in scroll mode is told it lost it
    /// while the old list is intact.
    fn leave_modal_mode(&mut self) {
        match self.mode {
            Mode::Normal => {}
            Mode::ValueAdjust { index } => {
                if let Some(spec) = self.registry.control_at(index) {
                    debug!("nav: value adjust aborted id={}", spec.id.0);
                }
                self.mode = Mode::Normal;
            }
            Mode::ScrollLock { index } => {
                if let Some(spec) = self.registry.control_at(index) {
                    self.surface.scroll_mode_changed(spec.id, false);
                    debug!("nav: scroll mode aborted id={}", spec.id.0);
                }
                self.mode = Mode::Normal;
            }
        }
    }
}
