use crate::analysis::filter::is_blank;
use crate::analysis::recommender::{HeroScore, ScoreBreakdown};
use crate::catalog::models::Hero;
use crate::draft::TEAM_SIZE;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct CandidateRow {
    rank: String,
    hero: String,
    position: String,
    attribute: String,
    roles: String,
    score: String,
}

#[derive(Tabled)]
struct HeroRow {
    #[tabled(rename = "#")]
    number: String,
    hero: String,
    position: String,
    attribute: String,
    attack: String,
    roles: String,
}

#[derive(Tabled)]
struct ComponentRow {
    component: String,
    value: String,
}

pub fn format_score(score: f64) -> String {
    format!("{:+.1}", score)
}

fn colored_score(score: f64) -> String {
    let text = format_score(score);
    if score > 0.0 {
        text.green().to_string()
    } else if score < 0.0 {
        text.red().to_string()
    } else {
        text.dimmed().to_string()
    }
}

/// A full team only explains an empty candidate list when no query is
/// narrowing it.
fn is_team_complete(team: &[Hero], query: &str) -> bool {
    team.len() >= TEAM_SIZE && is_blank(query)
}

pub fn display_candidates(
    candidates: &[HeroScore],
    team: &[Hero],
    query: &str,
    top_n: Option<usize>,
) {
    let title = if team.is_empty() {
        "🎯 Available Heroes".to_string()
    } else {
        format!("🎯 Best Picks vs {}", team_names(team))
    };
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if candidates.is_empty() {
        if is_team_complete(team, query) {
            println!("{}", "✅ Team complete: 5 heroes selected".green().bold());
        } else {
            println!("{}", "No heroes found".yellow());
        }
        return;
    }

    let shown = top_n.unwrap_or(candidates.len()).min(candidates.len());
    let rows: Vec<CandidateRow> = candidates
        .iter()
        .take(shown)
        .enumerate()
        .map(|(idx, c)| CandidateRow {
            rank: format!("#{}", idx + 1),
            hero: c.hero.localized_name.clone(),
            position: c.hero.position.to_string(),
            attribute: c.hero.primary_attr.label().to_string(),
            roles: c.hero.roles_label(),
            score: colored_score(c.score),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    if shown < candidates.len() {
        println!(
            "{}",
            format!("… {} more (use --top-n to show more)", candidates.len() - shown).dimmed()
        );
    }

    if !team.is_empty() {
        println!("\n{}", "Interpretation".bold().yellow());
        println!("• Score: sum of matchups against your team, bounded to [-10, +10]");
        println!("• Higher = your team fares better against this hero\n");
    }
}

pub fn display_heroes(heroes: &[&Hero]) {
    println!(
        "\n{}",
        format!("📖 Hero Catalog ({} heroes)", heroes.len()).bold().cyan()
    );
    println!("{}\n", "=".repeat(80).cyan());

    if heroes.is_empty() {
        println!("{}", "No heroes found".yellow());
        return;
    }

    let rows: Vec<HeroRow> = heroes
        .iter()
        .enumerate()
        .map(|(idx, hero)| HeroRow {
            number: format!("{}", idx + 1),
            hero: hero.localized_name.clone(),
            position: hero.position.to_string(),
            attribute: hero.primary_attr.label().to_string(),
            attack: hero.attack_type.label().to_string(),
            roles: hero.roles_label(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_team(team: &[Hero]) {
    println!(
        "\n{} {}",
        "👥 Team:".bold(),
        format!("{}/{}", team.len(), TEAM_SIZE).bold().cyan()
    );

    if team.is_empty() {
        println!("   {}", "(no heroes selected)".dimmed());
        return;
    }

    for (idx, hero) in team.iter().enumerate() {
        println!(
            "   {}. {} {}",
            idx + 1,
            hero.localized_name.bold(),
            format!("[{}]", hero.position.label()).dimmed()
        );
    }
}

pub fn display_matchup(hero: &Hero, against: &Hero, score: f64) {
    println!(
        "{} vs {}: {}",
        hero.localized_name.bold(),
        against.localized_name.bold(),
        colored_score(score)
    );
}

pub fn display_breakdown(team: &[Hero], candidate: &Hero, breakdown: &ScoreBreakdown) {
    println!(
        "\n{}",
        format!("🔎 {} against {}", candidate.localized_name, team_names(team))
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<ComponentRow> = breakdown
        .components
        .iter()
        .map(|c| ComponentRow {
            component: c.label.clone(),
            value: format_score(c.value),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("{} {}", "Raw total:".bold(), format_score(breakdown.raw_total));
    println!("{} {}\n", "Score:".bold(), colored_score(breakdown.score));
}

fn team_names(team: &[Hero]) -> String {
    team.iter()
        .map(|h| h.localized_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}
