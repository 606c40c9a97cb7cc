//! Discovery deck command handlers.

use serde::Serialize;
use tabled::Tabled;

use pronet_core::{
    Card, ConsumptionPolicy, DailyLimit, DeckConfig, DeckStatus, DiscoveryViewModel, SwipeAction,
    SwipeOutcome,
};

use crate::cli::{DeckOpts, DiscoverArgs, DiscoverCommand, GlobalOpts};
use crate::context::Context;
use crate::error::CliError;
use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Age")]
    age: u32,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Industry")]
    tag: String,
}

/// One applied swipe.
#[derive(Serialize)]
struct SwipeReport {
    step: usize,
    action: SwipeAction,
    outcome: &'static str,
    card: Option<String>,
    swipes_today: u32,
    remaining_today: Option<u32>,
    status: DeckStatus,
}

#[derive(Tabled)]
struct SwipeRow {
    #[tabled(rename = "#")]
    step: usize,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Card")]
    card: String,
    #[tabled(rename = "Today")]
    swipes_today: u32,
    #[tabled(rename = "Left")]
    remaining: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn outcome_label(outcome: &SwipeOutcome) -> &'static str {
    match outcome {
        SwipeOutcome::Blocked => "blocked",
        SwipeOutcome::Empty => "empty",
        SwipeOutcome::Recycled(_) => "recycled",
        SwipeOutcome::Removed(_) => "removed",
    }
}

fn remaining_label(remaining: Option<u32>) -> String {
    remaining.map_or_else(|| "∞".into(), |n| n.to_string())
}

/// Config-file deck settings with per-run overrides applied.
fn deck_config(base: DeckConfig, opts: &DeckOpts) -> DeckConfig {
    let mut config = base;
    if opts.linear {
        config.consumption = ConsumptionPolicy::Linear;
    }
    if let Some(limit) = opts.limit {
        config.daily_limit = DailyLimit::from_count(Some(limit));
    }
    config
}

/// Apply `actions` in order, recording each outcome.
fn apply_swipes(deck: &mut DiscoveryViewModel, actions: &[SwipeAction]) -> Vec<SwipeReport> {
    actions
        .iter()
        .enumerate()
        .map(|(i, &action)| {
            let card = deck.top_card().map(|c| c.name.clone());
            let outcome = deck.handle(action);
            SwipeReport {
                step: i + 1,
                action,
                outcome: outcome_label(&outcome),
                card: match outcome {
                    SwipeOutcome::Recycled(_) | SwipeOutcome::Removed(_) => card,
                    SwipeOutcome::Blocked | SwipeOutcome::Empty => None,
                },
                swipes_today: deck.swipes_today(),
                remaining_today: deck.remaining_today(),
                status: deck.status(),
            }
        })
        .collect()
}

fn summary(deck: &DiscoveryViewModel, color: bool) -> String {
    format!(
        "Deck {} · {} card(s) · {} swipe(s) today · limit {} · {}",
        output::paint_status(deck.status(), color),
        deck.cards().len(),
        deck.swipes_today(),
        deck.daily_free_limit(),
        if deck.is_circular() { "circular" } else { "linear" },
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(ctx: &Context, args: DiscoverArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        DiscoverCommand::Deck { deck } => {
            let deck = DiscoveryViewModel::with_sample_cards(deck_config(ctx.deck_config(), &deck));
            let cards: Vec<Card> = deck.cards().iter().cloned().collect();
            let out = output::render_list(
                &global.format(),
                &cards,
                |c| CardRow {
                    position: cards.iter().position(|x| x.id == c.id).map_or(0, |p| p + 1),
                    name: c.name.clone(),
                    age: c.age,
                    location: c.location.clone(),
                    tag: c.tag.clone(),
                },
                |c| c.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            output::note(&summary(&deck, ctx.color), global.quiet);
            Ok(())
        }

        DiscoverCommand::Swipe { actions, deck } => {
            let mut deck = DiscoveryViewModel::with_sample_cards(deck_config(ctx.deck_config(), &deck));
            let actions: Vec<SwipeAction> = actions.into_iter().map(SwipeAction::from).collect();
            let reports = apply_swipes(&mut deck, &actions);

            let color = ctx.color;
            let out = output::render_list(
                &global.format(),
                &reports,
                |r| SwipeRow {
                    step: r.step,
                    action: r.action.to_string(),
                    outcome: r.outcome.into(),
                    card: r.card.clone().unwrap_or_else(|| "-".into()),
                    swipes_today: r.swipes_today,
                    remaining: remaining_label(r.remaining_today),
                    status: output::paint_status(r.status, color),
                },
                |r| format!("{} {}", r.action, r.outcome),
            )?;
            output::print_output(&out, global.quiet);
            output::note(&summary(&deck, color), global.quiet);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(linear: bool, limit: Option<u32>) -> DeckOpts {
        DeckOpts { linear, limit }
    }

    #[test]
    fn overrides_apply_on_top_of_config() {
        let base = DeckConfig::circular().with_daily_limit(DailyLimit::from_count(Some(20)));
        let config = deck_config(base, &opts(true, Some(0)));
        assert_eq!(config.consumption, ConsumptionPolicy::Linear);
        assert_eq!(config.daily_limit, DailyLimit::Unlimited);
        assert_eq!(deck_config(base, &opts(false, None)), base);
    }

    #[test]
    fn reports_follow_quota_then_gate() {
        let config = deck_config(DeckConfig::circular(), &opts(false, Some(2)));
        let mut deck = DiscoveryViewModel::with_sample_cards(config);
        let reports = apply_swipes(&mut deck, &[SwipeAction::Like, SwipeAction::Pass, SwipeAction::Like]);

        let outcomes: Vec<_> = reports.iter().map(|r| r.outcome).collect();
        assert_eq!(outcomes, ["recycled", "recycled", "blocked"]);
        assert_eq!(reports[0].card.as_deref(), Some("Herman West"));
        assert_eq!(reports[1].status, DeckStatus::LimitReached);
        assert_eq!(reports[2].remaining_today, Some(0));
        assert_eq!(reports[2].card, None);
    }

    #[test]
    fn linear_deck_runs_dry() {
        let config = deck_config(DeckConfig::circular(), &opts(true, None));
        let mut deck = DiscoveryViewModel::with_sample_cards(config);
        let reports = apply_swipes(&mut deck, &[SwipeAction::Pass; 4]);
        assert_eq!(reports[3].outcome, "empty");
        assert_eq!(reports[3].status, DeckStatus::Exhausted);
        assert_eq!(reports[3].swipes_today, 4);
    }
}
