use anyhow::{Context, Result, bail};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use colored::Colorize;
use log::info;

use crate::config::settings::AppConfig;
use crate::domain::{CourtSchedule, Game, PlayerFields, SkillLevel, SkillStrength};
use crate::services::Roster;

const SESSION_START_HOUR: u32 = 18;

/// Inputs for a one-off cost quote
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub title: Option<String>,
    pub court_rate: Option<f64>,
    pub shuttle_price: Option<f64>,
    pub hours: Vec<f64>,
    pub players: usize,
    pub divide_equally: bool,
}

/// Builds a throwaway roster holding a single game described by `request`.
///
/// Court bookings start back to back at 18:00 on `date`, one per entry in
/// `request.hours`. Anything left unset falls back to the default settings.
pub fn build_quote(request: &QuoteRequest, date: NaiveDate) -> Result<Game> {
    let mut roster = Roster::new(AppConfig::new());

    let schedules = build_schedules(&request.hours, date)?;
    let mut fields = roster.new_game_fields(schedules);
    fields.title = request.title.clone();
    fields.divide_equally = request.divide_equally;
    if let Some(rate) = request.court_rate {
        fields.court_rate = rate;
    }
    if let Some(price) = request.shuttle_price {
        fields.shuttle_price = price;
    }

    let game = roster.games_mut().create(fields)?;

    for n in 1..=request.players {
        let player = roster.players_mut().create(placeholder_player(n))?;
        roster.add_player_to_game(game.id, player.id)?;
    }

    info!("Quoted game with {} player(s)", request.players);
    roster
        .games()
        .get(game.id)
        .cloned()
        .context("Quoted game disappeared from roster")
}

fn build_schedules(hours: &[f64], date: NaiveDate) -> Result<Vec<CourtSchedule>> {
    let mut start = session_start(date)?;
    let mut schedules = Vec::with_capacity(hours.len());

    for (idx, h) in hours.iter().enumerate() {
        let length = booking_length(*h)?;
        let end = start
            .checked_add_signed(length)
            .context("Booking length out of range")?;
        schedules.push(CourtSchedule::new(format!("Court {}", idx + 1), start, end));
        start = end;
    }
    Ok(schedules)
}

fn booking_length(hours: f64) -> Result<Duration> {
    if !hours.is_finite() {
        bail!("Booking length must be a number of hours, got {}", hours);
    }
    // saturates on huge inputs, which try_minutes then rejects
    let minutes = (hours * 60.0).round() as i64;
    Duration::try_minutes(minutes).context("Booking length out of range")
}

fn session_start(date: NaiveDate) -> Result<NaiveDateTime> {
    date.and_hms_opt(SESSION_START_HOUR, 0, 0)
        .with_context(|| format!("Invalid session start on {}", date))
}

fn placeholder_player(n: usize) -> PlayerFields {
    PlayerFields {
        nickname: format!("Player {}", n),
        full_name: format!("Player {}", n),
        contact_number: "0000000".to_string(),
        email: format!("player{}@roster.local", n),
        address: "Placeholder address".to_string(),
        remarks: None,
        min_level: SkillLevel::Beginner,
        min_strength: SkillStrength::Weak,
        max_level: SkillLevel::OpenPlayer,
        max_strength: SkillStrength::Strong,
    }
}

pub fn render_quote(game: &Game) -> String {
    let mut lines = vec![
        game.display_title().bold().to_string(),
        format!("  Schedule:       {}", game.schedule_summary()),
    ];
    for schedule in &game.schedules {
        lines.push(format!(
            "    {} {} ({:.2} h)",
            schedule.court_name.cyan(),
            schedule.time_range(),
            schedule.duration_in_hours()
        ));
    }
    lines.push(format!("  Total duration: {:.2} h", game.total_duration_in_hours()));
    lines.push(format!("  Court rate:     {:.2} / h", game.court_rate));
    lines.push(format!(
        "  Court cost:     {}",
        format!("{:.2}", game.total_court_cost()).green()
    ));
    lines.push(format!("  Shuttle price:  {:.2}", game.shuttle_price));
    lines.push(format!("  Players:        {}", game.player_count()));
    lines.push(format!(
        "  Per player:     {}",
        format!("{:.2}", game.cost_per_player()).yellow().bold()
    ));
    lines.join("\n")
}
