// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        Arc, Mutex,
        mpsc::{self, Receiver, TryRecvError},
    },
    thread,
    time::{Duration, Instant},
};

use chrono::{DateTime, Local};
use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, options::AppOptions},
    engine::{self, Censo, types::SectionKind},
    store::GridCache,
};

use super::{components, progress::GuiProgress};

pub fn run(options: eframe::NativeOptions, opts: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(opts)))),
    )?;
    Ok(())
}

/// What the worker thread hands back. The error is pre-rendered; the UI only shows it.
type Outcome = Result<Censo, String>;

pub struct App {
    pub opts: AppOptions,

    // shared with the worker; locked for the duration of one refresh
    pub cache: Arc<Mutex<GridCache>>,

    // last successful cycle, or the reason there is none
    pub censo: Option<Censo>,
    pub error: Option<String>,
    pub last_update: Option<DateTime<Local>>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    /// Set by the "refresh now" button; consumed on the next frame.
    pub refresh_requested: bool,

    rx: Option<Receiver<Outcome>>,
    next_refresh: Instant,
}

impl App {
    pub fn new(opts: AppOptions) -> Self {
        let cache = GridCache::new(opts.refresh.cache_ttl());
        logf!(
            "Init: url={} interval={}s ttl={}s",
            opts.source.url,
            opts.refresh.interval_secs,
            opts.refresh.cache_ttl_secs
        );

        Self {
            opts,
            cache: Arc::new(Mutex::new(cache)),
            censo: None,
            error: None,
            last_update: None,
            status: Arc::new(Mutex::new(s!("Carregando…"))),
            running: false,
            refresh_requested: false,
            rx: None,
            next_refresh: Instant::now(),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Spawn one refresh cycle. `force` drops the cached grid first.
    fn start_refresh(&mut self, ctx: &egui::Context, force: bool) {
        if self.running {
            return;
        }
        self.running = true;

        if force {
            match self.cache.lock() {
                Ok(mut c) => c.invalidate(),
                Err(p) => p.into_inner().invalidate(),
            }
            logf!("UI: Manual refresh");
        }

        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);

        let cache = Arc::clone(&self.cache);
        let opts = self.opts.clone();
        let status = Arc::clone(&self.status);
        let ctx2 = ctx.clone();

        thread::spawn(move || {
            let mut prog = GuiProgress::new(status);
            let mut cache = match cache.lock() {
                Ok(c) => c,
                Err(p) => p.into_inner(),
            };
            let outcome = engine::refresh(&mut cache, &opts, Some(&mut prog)).map_err(|e| e.to_string());
            drop(cache);
            let _ = tx.send(outcome);
            ctx2.request_repaint();
        });
    }

    /// Pick up a finished cycle, if any.
    fn poll(&mut self) {
        let Some(rx) = &self.rx else { return };
        let outcome = match rx.try_recv() {
            Ok(o) => o,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(s!("worker stopped unexpectedly")),
        };

        self.rx = None;
        self.running = false;
        self.next_refresh = Instant::now() + self.opts.refresh.interval();

        match outcome {
            Ok(censo) => {
                self.censo = Some(censo);
                self.error = None;
                self.last_update = Some(Local::now());
            }
            Err(e) => {
                loge!("UI: Refresh failed: {e}");
                self.censo = None;
                self.error = Some(e);
                self.status("Dados indisponíveis");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll();

        let now = Instant::now();
        if self.refresh_requested {
            self.refresh_requested = false;
            self.start_refresh(ctx, true);
        } else if !self.running && now >= self.next_refresh {
            self.start_refresh(ctx, false);
        }

        // Wake up for the next scheduled cycle even without input.
        let wait = if self.running {
            Duration::from_millis(250)
        } else {
            self.next_refresh.saturating_duration_since(now)
        };
        ctx.request_repaint_after(wait);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            components::top_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("dashboard_vscroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if let Some(err) = &self.error {
                        components::warnings::draw_error(ui, err);
                        return;
                    }
                    let Some(censo) = &self.censo else {
                        ui.label("Carregando…");
                        return;
                    };

                    components::warnings::draw(ui, censo);
                    components::cards::draw(ui, &censo.summary());
                    ui.add_space(8.0);

                    for kind in SectionKind::ALL {
                        components::section_table::draw(ui, kind, &censo.table(kind), censo.is_missing(kind));
                        ui.add_space(12.0);
                    }
                });
        });
    }
}
