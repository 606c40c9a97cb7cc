//! `pronet session`: interactive host over the composition root.
//!
//! Each loop iteration renders the visible screen of the current flow and
//! asks for one action. Flow changes remount the navigation container, so
//! the prompts always start from the new flow's root screen.

use std::io::IsTerminal;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use pronet_core::services::MockAuthProvider;
use pronet_core::viewmodels::{
    AuthenticationViewModel, ChatThreadViewModel, ChatsListViewModel, NotificationsViewModel,
    OnboardingPager, OtpEntry, PagerStep, ProfileViewModel,
};
use pronet_core::{CountryCode, Flow, NotificationFilter, Route, Screen, SwipeAction, TabItem};

use crate::cli::GlobalOpts;
use crate::context::Context;
use crate::error::CliError;
use crate::output;

use super::{profile, util};

const COUNTRIES: [CountryCode; 4] = [CountryCode::Us, CountryCode::Gb, CountryCode::Bd, CountryCode::In];
const OAUTH_PROVIDERS: [&str; 3] = ["LinkedIn", "Google", "Apple"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

struct Session<'a> {
    ctx: &'a mut Context,
    global: &'a GlobalOpts,
    theme: ColorfulTheme,
    pager: OnboardingPager,
    auth: AuthenticationViewModel<MockAuthProvider>,
}

pub async fn run(ctx: &mut Context, global: &GlobalOpts) -> Result<(), CliError> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::Validation {
            field: "session".into(),
            reason: "an interactive terminal is required".into(),
        });
    }

    let mut flow_changes = ctx.app.app_state().subscribe();
    let auth = AuthenticationViewModel::new(ctx.auth_provider());
    let mut session = Session {
        ctx,
        global,
        theme: ColorfulTheme::default(),
        pager: OnboardingPager::default(),
        auth,
    };

    session.banner();
    loop {
        let step = match session.ctx.flow() {
            Flow::Onboarding => session.onboarding()?,
            Flow::Auth => session.sign_in().await?,
            Flow::Main => session.main().await?,
        };
        if flow_changes.has_changed() {
            flow_changes.changed().await;
            session.banner();
        }
        if step == Step::Quit {
            return Ok(());
        }
    }
}

impl Session<'_> {
    fn say(&self, message: &str) {
        output::note(message, self.global.quiet);
    }

    fn banner(&self) {
        let flow = output::paint_flow(self.ctx.flow(), self.ctx.color);
        self.say(&format!("\n── {flow} · {} ──", self.ctx.app.visible_screen()));
    }

    fn select(&self, prompt: &str, items: &[&str]) -> Result<usize, CliError> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(util::prompt_err)
    }

    /// Free text; an empty answer means "back".
    fn ask(&self, prompt: &str) -> Result<String, CliError> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(util::prompt_err)?;
        Ok(answer.trim().to_owned())
    }

    // ── Onboarding ──────────────────────────────────────────────────

    fn onboarding(&mut self) -> Result<Step, CliError> {
        if let Some(slide) = self.pager.current() {
            self.say(&format!(
                "[{}/{}] {}\n{}",
                self.pager.index() + 1,
                self.pager.slides().len(),
                slide.heading,
                slide.text
            ));
        }
        let next = if self.pager.is_last() { "Get started" } else { "Next" };
        match self.select("Onboarding", &[next, "Back", "Skip", "Quit"])? {
            0 => {
                let pager = &mut self.pager;
                let mut step = PagerStep::Stayed;
                self.ctx.app.update_app_state(|state| step = pager.next(state));
                if step == PagerStep::Completed {
                    self.say("Welcome aboard.");
                }
            }
            1 => {
                self.pager.previous();
            }
            2 => {
                self.ctx.app.complete_onboarding();
            }
            _ => return Ok(Step::Quit),
        }
        Ok(Step::Continue)
    }

    // ── Sign-in ─────────────────────────────────────────────────────

    async fn sign_in(&mut self) -> Result<Step, CliError> {
        match self.ctx.app.visible_screen() {
            Screen::PhoneLogin => self.phone_login().await,
            Screen::OtpVerification { phone_display } => self.otp(&phone_display).await,
            Screen::OAuthLogin => self.oauth().await,
            _ => match self.select("Welcome", &["Continue with phone", "Continue with a provider", "Quit"])? {
                0 => {
                    self.ctx.app.navigate(Route::PhoneLogin);
                    Ok(Step::Continue)
                }
                1 => {
                    self.ctx.app.navigate(Route::OAuthLogin);
                    Ok(Step::Continue)
                }
                _ => Ok(Step::Quit),
            },
        }
    }

    async fn phone_login(&mut self) -> Result<Step, CliError> {
        let labels: Vec<String> = COUNTRIES
            .iter()
            .map(|c| format!("{} {} ({})", c.flag(), c.display_name(), c.dial()))
            .collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        let country = COUNTRIES
            .get(self.select("Country", &labels)?)
            .copied()
            .unwrap_or_default();

        let phone = self.ask("Phone number (empty to go back)")?;
        if phone.is_empty() {
            self.ctx.app.back();
            return Ok(Step::Continue);
        }
        if !self.auth.set_phone(country, &phone) {
            self.say("That doesn't look like a valid phone number.");
            return Ok(Step::Continue);
        }

        if util::with_spinner(self.global, "Sending code", self.auth.send_otp()).await {
            let phone = self.auth.state().phone_number.clone();
            self.ctx.app.navigate(Route::OtpVerification { phone });
        } else if let Some(err) = self.auth.error_message() {
            self.say(err);
        }
        Ok(Step::Continue)
    }

    async fn otp(&mut self, phone: &str) -> Result<Step, CliError> {
        let mut entry = OtpEntry::default();
        entry.set(&self.ask(&format!("Code sent to {phone} (empty to go back)"))?);
        if entry.code().is_empty() {
            self.ctx.app.back();
            return Ok(Step::Continue);
        }
        if !entry.is_complete() {
            self.say("Enter all six digits.");
            return Ok(Step::Continue);
        }

        if util::with_spinner(self.global, "Verifying", self.auth.verify_otp(entry.code())).await {
            self.ctx.app.login_succeeded();
        } else {
            self.say(self.auth.error_message().unwrap_or("Code rejected."));
        }
        Ok(Step::Continue)
    }

    async fn oauth(&mut self) -> Result<Step, CliError> {
        let mut items: Vec<&str> = OAUTH_PROVIDERS.to_vec();
        items.push("Back");
        let Some(provider) = OAUTH_PROVIDERS.get(self.select("Sign in with", &items)?) else {
            self.ctx.app.back();
            return Ok(Step::Continue);
        };

        let message = format!("Signing in with {provider}");
        if util::with_spinner(self.global, &message, self.auth.sign_in_with_oauth(provider)).await {
            self.ctx.app.login_succeeded();
        } else {
            self.say(self.auth.error_message().unwrap_or("Sign-in declined."));
        }
        Ok(Step::Continue)
    }

    // ── Main ────────────────────────────────────────────────────────

    async fn main(&mut self) -> Result<Step, CliError> {
        let mut items: Vec<&str> = TabItem::ALL.into_iter().map(TabItem::title).collect();
        items.push("Quit");
        let current = self.ctx.app.selected_tab();
        self.say(&format!("Tab: {current}"));

        let Some(&tab) = TabItem::ALL.get(self.select("Go to", &items)?) else {
            return Ok(Step::Quit);
        };
        self.ctx.app.select_tab(tab);
        match tab {
            TabItem::Home => self.home(),
            TabItem::Messages => self.messages().await,
            TabItem::Notifications => self.notifications().await,
            TabItem::Profile => self.profile().await,
        }
    }

    fn home(&mut self) -> Result<Step, CliError> {
        loop {
            let deck = self.ctx.app.discovery();
            let status = output::paint_status(deck.status(), self.ctx.color);
            let remaining = deck
                .remaining_today()
                .map_or_else(|| "unlimited".into(), |n| format!("{n} left today"));
            match deck.top_card() {
                Some(card) if !deck.gate_active() => {
                    self.say(&format!("{} · {} · {} [{status}, {remaining}]", card.title(), card.location, card.tag));
                }
                _ => self.say(&format!("No cards to show [{status}, {remaining}]")),
            }

            match self.select("Discover", &["Like", "Pass", "View profile", "Reload deck", "Reset daily limit", "Back"])? {
                0 => {
                    self.ctx.app.discovery_mut().handle(SwipeAction::Like);
                }
                1 => {
                    self.ctx.app.discovery_mut().handle(SwipeAction::Pass);
                }
                2 => {
                    let Some(card) = self.ctx.app.discovery().top_card().cloned() else {
                        continue;
                    };
                    self.ctx.app.navigate(Route::UserDetail { card: card.id.clone() });
                    self.say(&format!(
                        "{}\n{}\nInterests: {}\nLooking for: {}",
                        self.ctx.app.visible_screen(),
                        card.bio,
                        util::join_or_dash(&card.interests),
                        util::join_or_dash(&card.looking_for)
                    ));
                    self.ctx.app.back();
                }
                3 => self.ctx.app.discovery_mut().reload(),
                4 => self.ctx.app.discovery_mut().reset_daily_limit(),
                _ => return Ok(Step::Continue),
            }
        }
    }

    async fn messages(&mut self) -> Result<Step, CliError> {
        let mut list = ChatsListViewModel::new(self.ctx.conversations());
        list.set_search_text(self.ask("Search (empty for all)")?);
        util::with_spinner(self.global, "Loading conversations", list.load()).await;

        let mut items: Vec<String> = list
            .conversations()
            .iter()
            .map(|c| format!("{} · {} ({})", c.partner_name, c.last_message, c.time))
            .collect();
        items.push("Back".into());
        let items: Vec<&str> = items.iter().map(String::as_str).collect();
        let Some(partner) = list
            .conversations()
            .get(self.select("Conversations", &items)?)
            .map(|c| c.partner_name.clone())
        else {
            return Ok(Step::Continue);
        };

        self.ctx.app.navigate(Route::ChatThread { partner: partner.clone() });
        let mut thread = ChatThreadViewModel::new(self.ctx.chat_threads(), partner.clone());
        util::with_spinner(self.global, "Loading thread", thread.load()).await;
        loop {
            for m in thread.messages() {
                let from = if m.is_me { "You" } else { partner.as_str() };
                self.say(&format!("  {from} · {}: {}", m.time, m.text));
            }
            let text = self.ask("Message (empty to go back)")?;
            if text.is_empty() {
                break;
            }
            thread.set_input_text(text);
            if thread.send().await.is_none() {
                self.say(thread.error_message().unwrap_or("Message not sent."));
            }
        }
        self.ctx.app.back();
        Ok(Step::Continue)
    }

    async fn notifications(&mut self) -> Result<Step, CliError> {
        let mut vm = NotificationsViewModel::new(self.ctx.notifications());
        util::with_spinner(self.global, "Loading notifications", vm.load()).await;

        let filters = [
            NotificationFilter::All,
            NotificationFilter::Messages,
            NotificationFilter::Matches,
            NotificationFilter::System,
        ];
        let labels: Vec<String> = filters.iter().map(ToString::to_string).collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        vm.set_filter(
            filters
                .get(self.select("Show", &labels)?)
                .copied()
                .unwrap_or_default(),
        );

        for n in vm.filtered() {
            let dot = if n.unread { "●" } else { " " };
            self.say(&format!("{dot} {} · {}: {}", n.time, n.title, n.message));
        }
        self.say(&format!("{} unread", vm.unread_count()));
        Ok(Step::Continue)
    }

    async fn profile(&mut self) -> Result<Step, CliError> {
        let mut vm = ProfileViewModel::new(self.ctx.profiles());
        util::with_spinner(self.global, "Loading profile", vm.load_own_profile()).await;
        if let Some(p) = vm.profile() {
            self.say(&profile::detail(p));
        }

        match self.select("Profile", &["Edit headline", "Sign out", "Back"])? {
            0 => {
                self.ctx.app.navigate(Route::ProfileEdit);
                let headline = self.ask("Headline")?;
                if let Some(p) = vm.profile_mut() {
                    p.headline = headline;
                }
                if util::with_spinner(self.global, "Saving", vm.save_profile()).await {
                    self.say("Profile saved.");
                }
                self.ctx.app.back();
            }
            1 => {
                if util::confirm("Sign out?", "sign out", self.global.yes)? {
                    self.ctx.app.logout();
                    self.auth.sign_out();
                    self.pager = OnboardingPager::default();
                }
            }
            _ => {}
        }
        Ok(Step::Continue)
    }
}
