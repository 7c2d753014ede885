//! Score readout with a short "+N"/"-N" flash after each change.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::format;

pub const FLASH_MS: u64 = 1500;

#[component]
pub fn ScoreBadge(session: RwSignal<SessionState>) -> impl IntoView {
    let flash = RwSignal::new(None::<(i64, u64)>);

    Effect::new(move || {
        let Some(change) = session.with(|s| s.last_change) else {
            return;
        };
        flash.set(Some((change.points, change.seq)));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(FLASH_MS)).await;
            // A newer change owns the flash now.
            if flash.get_untracked().is_some_and(|(_, seq)| seq == change.seq) {
                flash.set(None);
            }
        });
    });

    let flash_class = move || match flash.get() {
        Some((points, _)) if points < 0 => "score-change negative show",
        Some(_) => "score-change positive show",
        None => "score-change",
    };

    view! {
        <div class="score-display">
            <span class="score-display__label">"积分"</span>
            <span class="score-display__value">{move || session.with(|s| s.score)}</span>
            <span class=flash_class>{move || flash.get().map(|(points, _)| format::signed(points)).unwrap_or_default()}</span>
        </div>
    }
}
