use super::*;
use crate::model::View;

impl GeoQuestApp {
    /// Cierra el quiz activo: aplica recompensas, pasa a Victory y guarda.
    pub(crate) fn complete_level(&mut self) {
        if self.session.view != View::Quiz {
            return;
        }
        let Some(id) = self.session.active_level else {
            return;
        };
        let report = self.progress.complete_level(id);
        if report.is_none() {
            log::warn!("Completed level {id} is not in the catalog");
        }
        self.read_aloud.stop();
        self.session.finish(report);
        self.commit();
    }

    /// Recompensas del nivel terminado, sólo si era la primera vez.
    pub fn fresh_rewards(&self) -> Option<&crate::progression::CompletionReport> {
        self.session
            .last_completion
            .as_ref()
            .filter(|r| r.first_time)
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::{fresh_app, play_level};
    use crate::model::View;

    #[test]
    fn first_completion_awards_xp_and_unlocks_next() {
        let mut app = fresh_app();
        play_level(&mut app, 1);

        let report = app.fresh_rewards().expect("first time");
        assert_eq!(report.xp_awarded, 100);
        assert_eq!(report.newly_unlocked, vec![2]);
        assert_eq!(app.progress.profile().xp, 100);
        assert_eq!(app.progress.profile().completed_levels, vec![1]);
        assert!(app.sync_generation > 0);
    }

    #[test]
    fn replaying_a_level_awards_nothing() {
        let mut app = fresh_app();
        play_level(&mut app, 1);
        app.return_to_map();
        let before = app.progress.profile().clone();

        play_level(&mut app, 1);

        assert_eq!(app.progress.profile(), &before);
        assert!(app.fresh_rewards().is_none());
        let report = app.session.last_completion.clone().expect("report");
        assert!(!report.first_time);
        assert_eq!(report.xp_awarded, 0);
    }

    #[test]
    fn full_campaign_awards_every_badge_once() {
        let mut app = fresh_app();
        for id in 1..=6 {
            play_level(&mut app, id);
            app.return_to_map();
        }
        // 100 + 150 + 200 + 200 + 250 + 500
        assert_eq!(app.progress.profile().xp, 1400);
        assert_eq!(app.progress.profile().level, 8);
        assert_eq!(
            app.progress.profile().badges,
            vec!["Hero".to_string(), "Master".to_string(), "Architect".to_string()]
        );

        play_level(&mut app, 6);
        assert_eq!(app.progress.profile().badges.len(), 3);
        assert_eq!(app.session.view, View::Victory);
    }

    #[test]
    fn completion_outside_the_quiz_is_ignored() {
        let mut app = fresh_app();
        app.start_level(1);
        app.complete_level();

        assert_eq!(app.session.view, View::Lesson);
        assert_eq!(app.progress.profile().xp, 0);
        assert!(!app.progress.is_unlocked(2));
        assert_eq!(app.sync_generation, 0);
    }

    #[test]
    fn complete_without_active_level_is_noop() {
        let mut app = fresh_app();
        app.complete_level();
        assert_eq!(app.session.view, View::Map);
        assert_eq!(app.sync_generation, 0);
    }
}
