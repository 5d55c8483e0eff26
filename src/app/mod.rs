use crate::config::GeoQuestConfig;
use crate::data::read_catalog_embedded;
use crate::model::Catalog;
use crate::persistence::{KeyValueStore, Persistence};
use crate::progression::Progress;
use crate::session::SessionState;
use crate::speech::ReadAloud;
use serde::{Deserialize, Serialize};

// Submódulos
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{Achievement, LevelCard};

pub const APP_ID: &str = "GeoQuest";

/// Preferencias de interfaz que guarda eframe
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub dark_mode: bool,
}

/// Contexto de la aplicación: toda acción del usuario pasa por aquí.
pub struct GeoQuestApp {
    pub config: GeoQuestConfig,
    pub catalog: Catalog,
    pub progress: Progress,
    pub session: SessionState,
    pub read_aloud: ReadAloud,
    pub prefs: UiPrefs,
    pub confirm_reset: bool,
    pub notebook_open: bool,
    pub notice: Option<String>,
    /// Sube tras cada guardado correcto; la cabecera lo vigila.
    pub sync_generation: u64,
    pub(crate) sync_seen: u64,
    pub(crate) sync_until: f64,
    persistence: Persistence,
}

impl GeoQuestApp {
    pub fn with_store(
        config: GeoQuestConfig,
        catalog: Catalog,
        store: Box<dyn KeyValueStore>,
        read_aloud: ReadAloud,
    ) -> Self {
        let persistence = Persistence::new(store);
        let profile = persistence.load_profile(&config.profile_key);
        let stored_levels = persistence.load_levels(&config.levels_key);
        let progress = Progress::restore(&catalog, profile, stored_levels.as_deref());

        log::info!(
            "Loaded profile: {} XP, {} levels completed",
            progress.profile().xp,
            progress.profile().completed_levels.len()
        );

        Self {
            config,
            catalog,
            progress,
            session: SessionState::default(),
            read_aloud,
            prefs: UiPrefs::default(),
            confirm_reset: false,
            notebook_open: false,
            notice: None,
            sync_generation: 0,
            sync_seen: 0,
            sync_until: 0.0,
            persistence,
        }
    }

    /// Valores de plataforma: ficheros o `localStorage`, config del entorno, catálogo embebido.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = GeoQuestConfig::from_env();
        let store = platform_store(&config);
        let read_aloud = platform_read_aloud(&config);
        let mut app = Self::with_store(config, read_catalog_embedded(), store, read_aloud);

        if let Some(prefs) = cc
            .storage
            .and_then(|s| eframe::get_value::<UiPrefs>(s, eframe::APP_KEY))
        {
            app.prefs = prefs;
        }
        cc.egui_ctx.set_visuals(if app.prefs.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        app
    }

    /// Escribe ambos registros. Devuelve si las dos escrituras fueron bien.
    pub fn commit(&mut self) -> bool {
        let profile = self
            .persistence
            .save(&self.config.profile_key, self.progress.profile());
        let levels = self
            .persistence
            .save(&self.config.levels_key, self.progress.levels());

        match (profile, levels) {
            (Ok(()), Ok(())) => {
                self.sync_generation += 1;
                true
            }
            (profile, levels) => {
                for err in [profile.err(), levels.err()].into_iter().flatten() {
                    log::warn!("Failed to save progress: {err}");
                }
                false
            }
        }
    }

    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_store(config: &GeoQuestConfig) -> Box<dyn KeyValueStore> {
    let dir = config
        .data_dir
        .clone()
        .or_else(|| eframe::storage_dir(APP_ID))
        .unwrap_or_else(|| std::path::PathBuf::from(".geoquest"));
    log::info!("Storing progress in {}", dir.display());
    Box::new(crate::persistence::FileStore::new(dir))
}

#[cfg(target_arch = "wasm32")]
fn platform_store(_config: &GeoQuestConfig) -> Box<dyn KeyValueStore> {
    Box::new(crate::persistence::LocalStorage)
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_read_aloud(config: &GeoQuestConfig) -> ReadAloud {
    use crate::speech::{AudioOutput, Dispatch, HttpSynthesizer, NullOutput};
    use std::sync::Arc;

    let synthesizer = match HttpSynthesizer::new(&config.speech) {
        Ok(s) => s,
        Err(e) => {
            log::info!("Read-aloud disabled: {e}");
            return ReadAloud::disabled();
        }
    };

    #[cfg(feature = "playback")]
    let output: Box<dyn AudioOutput> = match crate::speech::RodioOutput::try_default() {
        Ok(out) => Box::new(out),
        Err(e) => {
            log::warn!("No audio device, read-aloud requests will fail: {e}");
            Box::new(NullOutput)
        }
    };
    #[cfg(not(feature = "playback"))]
    let output: Box<dyn AudioOutput> = Box::new(NullOutput);

    ReadAloud::new(Arc::new(synthesizer), output, Dispatch::Background)
}

#[cfg(target_arch = "wasm32")]
fn platform_read_aloud(_config: &GeoQuestConfig) -> ReadAloud {
    ReadAloud::disabled()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::View;
    use crate::notebook::NotebookField;
    use crate::persistence::MemoryStore;

    pub(crate) fn app_with(store: MemoryStore) -> GeoQuestApp {
        GeoQuestApp::with_store(
            GeoQuestConfig::default(),
            read_catalog_embedded(),
            Box::new(store),
            ReadAloud::disabled(),
        )
    }

    pub(crate) fn fresh_app() -> GeoQuestApp {
        app_with(MemoryStore::new())
    }

    /// Juega un nivel acertando todas las preguntas.
    pub(crate) fn play_level(app: &mut GeoQuestApp, id: u32) {
        app.start_level(id);
        assert_eq!(app.session.view, View::Lesson, "level {id} should start");
        while app.session.view == View::Lesson {
            app.advance_slide();
        }
        while app.session.view == View::Quiz {
            let correct = app
                .current_question()
                .map(|q| q.correct_answer)
                .expect("question");
            app.record_answer(correct);
            app.advance_quiz();
        }
        assert_eq!(app.session.view, View::Victory);
    }

    fn snapshot(app: &GeoQuestApp) -> MemoryStore {
        let mut copy = MemoryStore::new();
        for key in [&app.config.profile_key, &app.config.levels_key] {
            if let Some(value) = app.persistence().store().get(key).expect("get") {
                copy.set(key, &value).expect("set");
            }
        }
        copy
    }

    #[test]
    fn completion_is_committed_and_restored() {
        let mut app = fresh_app();
        play_level(&mut app, 1);
        app.return_to_map();
        app.set_note(1, NotebookField::Summary, "point, line, plane");

        let reloaded = app_with(snapshot(&app));

        assert_eq!(reloaded.progress.profile(), app.progress.profile());
        assert!(reloaded.progress.is_unlocked(2));
        assert!(reloaded.progress.level(1).expect("1").completed);
        assert_eq!(
            reloaded
                .notebook_entry(1)
                .map(|e| e.summary.as_str()),
            Some("point, line, plane")
        );
        assert_eq!(reloaded.session, SessionState::default());
    }

    #[test]
    fn corrupt_levels_record_is_rebuilt_from_profile() {
        let mut app = fresh_app();
        play_level(&mut app, 1);
        let mut store = snapshot(&app);
        store.set("geoquest_levels_v1", "{{{ nope").expect("set");

        let reloaded = app_with(store);

        assert!(reloaded.progress.level(1).expect("1").completed);
        assert!(reloaded.progress.is_unlocked(2));
        assert_eq!(reloaded.progress.profile().xp, 100);
    }

    #[test]
    fn corrupt_profile_falls_back_to_first_run() {
        let mut store = MemoryStore::new();
        store.set("geoquest_user_v1", "garbage").expect("set");

        let app = app_with(store);

        assert_eq!(app.progress.profile().xp, 0);
        assert_eq!(app.progress.profile().level, 1);
        assert!(app.progress.is_unlocked(1));
        assert!(!app.progress.is_unlocked(2));
    }

    #[test]
    fn commit_is_idempotent() {
        let mut app = fresh_app();
        play_level(&mut app, 1);
        let first = snapshot(&app);
        assert!(app.commit());
        let second = snapshot(&app);
        assert_eq!(first.raw("geoquest_user_v1"), second.raw("geoquest_user_v1"));
        assert_eq!(first.raw("geoquest_levels_v1"), second.raw("geoquest_levels_v1"));
    }

    #[test]
    fn persisted_levels_mark_completed_ids_in_profile() {
        let mut app = fresh_app();
        play_level(&mut app, 1);
        app.return_to_map();
        play_level(&mut app, 2);

        let raw = app
            .persistence()
            .store()
            .get("geoquest_levels_v1")
            .expect("get")
            .expect("present");
        let levels: Vec<crate::model::Level> = serde_json::from_str(&raw).expect("levels json");
        for level in levels.iter().filter(|l| l.completed) {
            assert!(app.progress.profile().has_completed(level.id));
        }
        assert_eq!(levels.iter().filter(|l| l.completed).count(), 2);
    }
}
