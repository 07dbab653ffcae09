use std::process::ExitCode;

use chrono::{Datelike, NaiveDate};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use bazi_base::Element;
use bazi_calendar::{BirthInput, InputError};
use bazi_chart::Chart;
use bazi_forecast::{
    AgePeriod, PeriodGuidance, age_periods, annual_luck, daily_forecast, period_guidance,
};
use bazi_interactions::{PillarInteraction, analyze, summarize};
use bazi_match::compatibility;
use bazi_text::{
    Lang, element_advice, interaction_description, seasonal_explanation, use_god_explanation,
};

#[derive(Parser)]
#[command(name = "bazi", about = "Four Pillars destiny chart CLI")]
struct Cli {
    /// Output language: en, zh-TW, zh-CN, ko
    #[arg(long, default_value = "en", global = true)]
    lang: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Birth {
    /// Birth date (YYYY-MM-DD, years 1900-2100)
    #[arg(long)]
    date: String,
    /// Birth hour (0-23)
    #[arg(long)]
    hour: u32,
    /// Gender: male or female
    #[arg(long)]
    gender: String,
}

impl Birth {
    fn parse(&self) -> Result<BirthInput, InputError> {
        BirthInput::parse(&self.date, self.hour, &self.gender)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart with annotations and pillar interactions
    Chart {
        #[command(flatten)]
        birth: Birth,
    },
    /// Daily forecast for a target date
    Daily {
        #[command(flatten)]
        birth: Birth,
        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        target: String,
    },
    /// Annual luck for a target year
    Annual {
        #[command(flatten)]
        birth: Birth,
        /// Target year
        #[arg(long)]
        year: i32,
    },
    /// Decade luck periods
    Luck {
        #[command(flatten)]
        birth: Birth,
    },
    /// Compatibility between two charts
    Compat {
        #[arg(long)]
        date_a: String,
        #[arg(long)]
        hour_a: u32,
        #[arg(long)]
        gender_a: String,
        #[arg(long)]
        date_b: String,
        #[arg(long)]
        hour_b: u32,
        #[arg(long)]
        gender_b: String,
    },
}

#[derive(Serialize)]
struct ChartReport {
    #[serde(flatten)]
    chart: Chart,
    seasonal_explanation: String,
    use_god_explanation: String,
    use_god_advice: AdviceReport,
    interactions: Vec<InteractionReport>,
    interaction_summary: bazi_interactions::InteractionSummary,
}

#[derive(Serialize)]
struct AdviceReport {
    colors: String,
    directions: String,
    seasons: String,
    careers: String,
    numbers: &'static str,
}

fn advice_report(element: Element, lang: Lang) -> AdviceReport {
    let advice = element_advice(element);
    AdviceReport {
        colors: advice.colors.get(lang).to_string(),
        directions: advice.directions.get(lang).to_string(),
        seasons: advice.seasons.get(lang).to_string(),
        careers: advice.careers.get(lang).to_string(),
        numbers: advice.numbers,
    }
}

#[derive(Serialize)]
struct InteractionReport {
    #[serde(flatten)]
    interaction: PillarInteraction,
    description: String,
}

#[derive(Serialize)]
struct LuckReport {
    #[serde(flatten)]
    period: AgePeriod,
    #[serde(flatten)]
    guidance: PeriodGuidance,
}

fn chart_report(chart: Chart, lang: Lang) -> ChartReport {
    let interactions = analyze(&chart.pillars);
    let summary = summarize(&interactions);
    let dm = chart.day_master.element();
    ChartReport {
        seasonal_explanation: seasonal_explanation(chart.seasonal_strength, dm, lang),
        use_god_explanation: use_god_explanation(&chart.use_god, dm, lang),
        use_god_advice: advice_report(chart.use_god.use_god, lang),
        interactions: interactions
            .into_iter()
            .map(|interaction| InteractionReport {
                description: interaction_description(&chart.pillars, &interaction, lang),
                interaction,
            })
            .collect(),
        interaction_summary: summary,
        chart,
    }
}

fn parse_target(date: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| InputError::InvalidDate(date.to_string()))
}

fn run(cli: Cli) -> Result<String, InputError> {
    let lang = Lang::from_tag(&cli.lang);
    match cli.command {
        Commands::Chart { birth } => {
            let chart = Chart::from_birth(birth.parse()?);
            Ok(pretty(&chart_report(chart, lang)))
        }
        Commands::Daily { birth, target } => {
            let chart = Chart::from_birth(birth.parse()?);
            let target = parse_target(&target)?;
            Ok(pretty(&daily_forecast(&chart, target, lang)))
        }
        Commands::Annual { birth, year } => {
            let chart = Chart::from_birth(birth.parse()?);
            Ok(pretty(&annual_luck(&chart.pillars, year, lang)))
        }
        Commands::Luck { birth } => {
            let input = birth.parse()?;
            let chart = Chart::from_birth(input);
            let periods: Vec<LuckReport> = age_periods(
                input.date.year(),
                input.gender,
                chart.pillars.year,
                chart.day_master.element(),
            )
            .into_iter()
            .map(|period| LuckReport {
                guidance: period_guidance(&period, lang),
                period,
            })
            .collect();
            Ok(pretty(&periods))
        }
        Commands::Compat {
            date_a,
            hour_a,
            gender_a,
            date_b,
            hour_b,
            gender_b,
        } => {
            let a = Chart::from_birth(BirthInput::parse(&date_a, hour_a, &gender_a)?);
            let b = Chart::from_birth(BirthInput::parse(&date_b, hour_b, &gender_b)?);
            Ok(pretty(&compatibility(&a, &b, lang)))
        }
    }
}

fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
