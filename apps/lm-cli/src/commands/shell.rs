// shell.rs — Interactive calculator session.
//
// Each input line is one user event: a form edit, a unit change, a
// calculate request, or a goal-list mutation. Handlers run to completion
// before the next line is read. The session writes to any `Write`, so tests
// drive it with an in-memory buffer and only `run` touches the terminal.

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use lm_goal::{EventDispatcher, GoalNotice, GoalTracker, LifeEvent};
use lm_lifespan::{DisplayStyle, Gender, LifespanEstimator, LifespanTable, TimeUnit};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::config::LifemeterConfig;
use crate::render;

const PROMPT: &str = "lifemeter> ";

const HELP: &str = "\
Commands:
  age <years>          set your age
  gender <g>           male, female or other
  nationality <name>   see `lifemeter countries`
  unit <u>             weeks, months or years
  style <s>            default, cats or eggplants
  calculate            estimate your remaining time
  status               show inputs and the current estimate
  goal <text>          add a life goal
  toggle <n>           mark goal n done / not done
  goals                list your life goals
  alive                check whether you are alive
  feedback <text>      tell us we got it wrong
  help                 show this help
  quit                 leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Age(String),
    Gender(Gender),
    Nationality(String),
    Unit(TimeUnit),
    Style(DisplayStyle),
    Calculate,
    Status,
    Goal(String),
    /// 1-based position as typed.
    Toggle(usize),
    Goals,
    Alive,
    Feedback(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parse one input line. Blank lines parse to `None`.
pub fn parse_command(line: &str) -> anyhow::Result<Option<ShellCommand>> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };
    let arg = rest.trim();

    let cmd = match word.to_lowercase().as_str() {
        "age" => ShellCommand::Age(arg.to_string()),
        "gender" => ShellCommand::Gender(arg.parse()?),
        "nationality" | "country" => ShellCommand::Nationality(arg.to_string()),
        "unit" => ShellCommand::Unit(arg.parse()?),
        "style" => ShellCommand::Style(arg.parse()?),
        "calculate" | "calc" => ShellCommand::Calculate,
        "status" => ShellCommand::Status,
        // Goal text keeps its trailing whitespace; only the separator is dropped.
        "goal" | "add" => ShellCommand::Goal(rest.to_string()),
        "toggle" | "done" => {
            let n = arg
                .parse()
                .with_context(|| format!("expected a goal number, got '{}'", arg))?;
            ShellCommand::Toggle(n)
        }
        "goals" | "list" => ShellCommand::Goals,
        "alive" => ShellCommand::Alive,
        "feedback" => ShellCommand::Feedback(arg.to_string()),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => anyhow::bail!("unknown command '{}' (try `help`)", other),
    };
    Ok(Some(cmd))
}

pub struct Shell {
    estimator: LifespanEstimator,
    tracker: GoalTracker,
    dispatcher: EventDispatcher,
    style: DisplayStyle,
    glyphs_per_row: usize,
    alive_delay: Duration,
}

impl Shell {
    pub fn new(config: &LifemeterConfig) -> Self {
        Self {
            estimator: LifespanEstimator::new(LifespanTable::builtin())
                .with_time_unit(config.display.time_unit),
            tracker: GoalTracker::with_notice(GoalNotice::from_secs(config.goals.notice_secs)),
            dispatcher: EventDispatcher::with_tracing(),
            style: config.display.style,
            glyphs_per_row: config.display.glyphs_per_row,
            alive_delay: Duration::from_millis(config.alive.delay_ms),
        }
    }

    pub fn estimator(&self) -> &LifespanEstimator {
        &self.estimator
    }

    pub fn tracker(&self) -> &GoalTracker {
        &self.tracker
    }

    /// Parse and execute one line. Parse errors are shown, not returned.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> anyhow::Result<Flow> {
        self.tracker.tick(Utc::now());
        match parse_command(line) {
            Ok(Some(cmd)) => self.execute(cmd, out),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                writeln!(out, "{:#}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, cmd: ShellCommand, out: &mut impl Write) -> anyhow::Result<Flow> {
        match cmd {
            ShellCommand::Age(age) => {
                writeln!(out, "Age set to '{}'.", age)?;
                self.estimator.set_age(age);
            }
            ShellCommand::Gender(gender) => {
                self.estimator.set_gender(gender);
                writeln!(out, "Gender set to {}.", gender)?;
            }
            ShellCommand::Nationality(name) => self.set_nationality(&name, out)?,
            ShellCommand::Unit(unit) => {
                self.estimator.set_time_unit(unit);
                writeln!(out, "Time unit set to {}.", unit)?;
                self.write_summary(out)?;
            }
            ShellCommand::Style(style) => {
                self.style = style;
                writeln!(out, "Display style set to {} ({}).", style, style.glyph())?;
            }
            ShellCommand::Calculate => match self.estimator.calculate() {
                Ok(result) => {
                    writeln!(out, "Estimated remaining years: {}", result.remaining_years)?;
                    self.write_summary(out)?;
                }
                Err(e) => writeln!(out, "{}", render::estimate_error(&e))?,
            },
            ShellCommand::Status => self.write_status(out)?,
            ShellCommand::Goal(text) => self.add_goal(text, out)?,
            ShellCommand::Toggle(n) => self.toggle_goal(n, out)?,
            ShellCommand::Goals => {
                write!(out, "{}", render::goal_list(self.tracker.goals()))?;
                self.write_notice(out)?;
            }
            ShellCommand::Alive => self.check_alive(out)?,
            ShellCommand::Feedback(text) => {
                if !text.trim().is_empty() {
                    writeln!(out, "Feedback received: {}", text)?;
                }
            }
            ShellCommand::Help => write!(out, "{}", HELP)?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn set_nationality(&mut self, name: &str, out: &mut impl Write) -> anyhow::Result<()> {
        match self.estimator.table().resolve(name) {
            Some(key) => {
                self.estimator.set_nationality(key);
                writeln!(out, "Nationality set to {}.", key)?;
            }
            None => {
                self.estimator.set_nationality(name);
                writeln!(
                    out,
                    "'{}' is not in the lifespan table; see `lifemeter countries`.",
                    name
                )?;
            }
        }
        Ok(())
    }

    fn add_goal(&mut self, text: String, out: &mut impl Write) -> anyhow::Result<()> {
        self.tracker.set_draft(text);
        let now = Utc::now();
        let Some(index) = self.tracker.submit_draft(now) else {
            return Ok(());
        };
        if let Some(goal) = self.tracker.get(index) {
            self.dispatcher
                .dispatch(&LifeEvent::goal_added(index, &goal.text));
            writeln!(out, "Added goal {}: {}", index + 1, goal.text)?;
        }
        self.write_notice(out)
    }

    fn toggle_goal(&mut self, n: usize, out: &mut impl Write) -> anyhow::Result<()> {
        let toggled = n
            .checked_sub(1)
            .and_then(|index| Some((index, self.tracker.toggle_goal(index)?)));
        match toggled {
            Some((index, completed)) => {
                self.dispatcher
                    .dispatch(&LifeEvent::goal_toggled(index, completed));
                let state = if completed { "done" } else { "not done" };
                writeln!(out, "Goal {} marked {}.", n, state)?;
            }
            None => writeln!(out, "No goal #{}. Use `goals` to list them.", n)?,
        }
        Ok(())
    }

    fn check_alive(&self, out: &mut impl Write) -> anyhow::Result<()> {
        writeln!(out, "Checking...")?;
        out.flush()?;
        std::thread::sleep(self.alive_delay);
        writeln!(out, "Yes, you are alive!")?;
        writeln!(out, "Share your result with friends:")?;
        writeln!(out, "  \"I am excited to announce that I am alive!\"")?;
        Ok(())
    }

    fn write_summary(&self, out: &mut impl Write) -> anyhow::Result<()> {
        if let Some(result) = self.estimator.result() {
            if let Some(summary) =
                render::remaining_summary(&result, self.style, self.glyphs_per_row)
            {
                write!(out, "{}", summary)?;
            }
        }
        Ok(())
    }

    fn write_notice(&self, out: &mut impl Write) -> anyhow::Result<()> {
        if self.tracker.notice_visible(Utc::now()) {
            writeln!(out, "[NOTICE] {}", self.tracker.notice().message())?;
        }
        Ok(())
    }

    fn write_status(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let input = self.estimator.input();
        let show = |v: Option<String>| v.unwrap_or_else(|| "(not set)".to_string());
        writeln!(out, "Age:         {}", show(input.age.clone()))?;
        writeln!(out, "Gender:      {}", show(input.gender.map(|g| g.to_string())))?;
        writeln!(out, "Nationality: {}", show(input.nationality.clone()))?;
        writeln!(out, "Unit:        {}", self.estimator.time_unit())?;
        writeln!(out, "Style:       {}", self.style)?;
        match self.estimator.result() {
            Some(result) => {
                writeln!(out, "Remaining:   {} years", result.remaining_years)?;
                writeln!(
                    out,
                    "             {} {}",
                    result.remaining_time, result.time_unit
                )?;
            }
            None => writeln!(out, "Remaining:   (not calculated)")?,
        }
        writeln!(
            out,
            "Goals:       {} ({} done)",
            self.tracker.len(),
            self.tracker.completed_count()
        )?;
        Ok(())
    }
}

/// Run the interactive session on the terminal.
pub fn run(config: &LifemeterConfig) -> anyhow::Result<()> {
    let mut shell = Shell::new(config);
    let mut editor = DefaultEditor::new().context("failed to start line editor")?;
    let mut stdout = std::io::stdout();

    writeln!(stdout, "lifemeter — type `help` for commands.")?;
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                if shell.handle_line(&line, &mut stdout)? == Flow::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("failed to read input"),
        }
    }
    tracing::debug!(
        goals = shell.tracker().len(),
        remaining_years = ?shell.estimator().remaining_years(),
        "session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> LifemeterConfig {
        let mut config = LifemeterConfig::default();
        config.alive.delay_ms = 0;
        config
    }

    /// Feed lines into a fresh shell and return it with everything it wrote.
    fn drive(lines: &[&str]) -> (Shell, String) {
        let mut shell = Shell::new(&test_config());
        let mut out = Vec::new();
        for line in lines {
            if shell.handle_line(line, &mut out).unwrap() == Flow::Quit {
                break;
            }
        }
        (shell, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_known_commands() {
        assert_eq!(
            parse_command("gender Female").unwrap(),
            Some(ShellCommand::Gender(Gender::Female))
        );
        assert_eq!(
            parse_command("unit weeks").unwrap(),
            Some(ShellCommand::Unit(TimeUnit::Weeks))
        );
        assert_eq!(
            parse_command("nationality south korea").unwrap(),
            Some(ShellCommand::Nationality("south korea".into()))
        );
        assert_eq!(
            parse_command("toggle 2").unwrap(),
            Some(ShellCommand::Toggle(2))
        );
        assert_eq!(parse_command("EXIT").unwrap(), Some(ShellCommand::Quit));
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(parse_command("unit days").is_err());
        assert!(parse_command("toggle first").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn goal_text_is_kept_as_typed() {
        assert_eq!(
            parse_command("goal  Learn piano  ").unwrap(),
            Some(ShellCommand::Goal(" Learn piano  ".into()))
        );
    }

    #[test]
    fn calculate_japan_in_months() {
        let (shell, out) = drive(&[
            "age 30",
            "gender male",
            "nationality japan",
            "unit months",
            "calculate",
        ]);
        assert!(out.contains("Estimated remaining years: 51"));
        assert!(out.contains("You have approximately 612 months left."));
        assert_eq!(out.matches("▪️").count(), 100);
        assert_eq!(shell.estimator().remaining_time(), Some(612));
    }

    #[test]
    fn unit_change_rerenders_existing_estimate() {
        let (shell, out) = drive(&[
            "age 30",
            "gender male",
            "nationality Japan",
            "calculate",
            "age 70",
            "unit years",
        ]);
        assert!(out.contains("You have approximately 51 years left."));
        assert_eq!(shell.estimator().remaining_years(), Some(51));
    }

    #[test]
    fn outlived_average_shows_no_glyphs() {
        let (shell, out) = drive(&[
            "age 90",
            "gender female",
            "nationality Nigeria",
            "calculate",
        ]);
        assert!(out.contains("Estimated remaining years: -34"));
        assert!(!out.contains("You have approximately"));
        assert_eq!(shell.estimator().glyph_count(), 0);
    }

    #[test]
    fn calculate_with_missing_fields_prompts() {
        let (shell, out) = drive(&["age 30", "calculate"]);
        assert!(out.contains("Please fill in all fields"));
        assert!(out.contains("gender, nationality"));
        assert!(shell.estimator().result().is_none());
    }

    #[test]
    fn unknown_nationality_fails_at_calculate() {
        let (shell, out) = drive(&["age 30", "gender other", "nationality Atlantis", "calculate"]);
        assert!(out.contains("not in the lifespan table"));
        assert!(out.contains("Could not estimate"));
        assert!(shell.estimator().result().is_none());
    }

    #[test]
    fn goals_add_toggle_and_list() {
        let (shell, out) = drive(&["goal Learn piano", "goal Travel", "toggle 1", "goals"]);
        let goals = shell.tracker().goals();
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].text, "Learn piano");
        assert!(goals[0].completed);
        assert_eq!(goals[1].text, "Travel");
        assert!(!goals[1].completed);

        assert!(out.contains("Goal 1 marked done."));
        assert!(out.contains("  1. [x] Learn piano"));
        assert!(out.contains("  2. [ ] Travel"));
    }

    #[test]
    fn adding_a_goal_shows_the_notice() {
        let (_, out) = drive(&["goal Run a marathon"]);
        assert!(out.contains("Added goal 1: Run a marathon"));
        assert!(out.contains("[NOTICE] You probably won't make it, sorry."));
    }

    #[test]
    fn blank_goal_is_silently_ignored() {
        let (shell, out) = drive(&["goal", "goal    "]);
        assert!(shell.tracker().is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn toggle_out_of_range_changes_nothing() {
        let (shell, out) = drive(&["goal Travel", "toggle 0", "toggle 2"]);
        assert!(out.contains("No goal #0."));
        assert!(out.contains("No goal #2."));
        assert!(!shell.tracker().goals()[0].completed);
    }

    #[test]
    fn alive_check_answers_yes() {
        let (_, out) = drive(&["alive"]);
        assert!(out.contains("Yes, you are alive!"));
        assert!(out.contains("I am excited to announce that I am alive!"));
    }

    #[test]
    fn feedback_echoes_non_empty_text() {
        let (_, out) = drive(&["feedback I am a ghost", "feedback   "]);
        assert_eq!(out, "Feedback received: I am a ghost\n");
    }

    #[test]
    fn style_changes_glyph() {
        let (_, out) = drive(&[
            "style eggplants",
            "age 80",
            "gender female",
            "nationality Japan",
            "unit years",
            "calculate",
        ]);
        assert!(out.contains("You have approximately 7 years left."));
        assert_eq!(out.matches("🍆").count(), 8);
    }

    #[test]
    fn quit_stops_processing() {
        let (shell, _) = drive(&["quit", "goal Never added"]);
        assert!(shell.tracker().is_empty());
    }

    #[test]
    fn status_reports_inputs() {
        let (_, out) = drive(&["age 41", "status"]);
        assert!(out.contains("Age:         41"));
        assert!(out.contains("Gender:      (not set)"));
        assert!(out.contains("Remaining:   (not calculated)"));
    }
}
