//! `--event` steps replayed against a running session.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use ewui_runtime::{EditError, Host, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `click:ID`
    Click(String),
    /// `tick:ID` or `tick:ID*N`
    Tick { timer: String, times: u32 },
    /// `set:ID=TEXT`
    Set { id: String, text: String },
    /// `select:ID=N`
    Select { id: String, index: usize },
    /// `check:ID=N` / `uncheck:ID=N`
    Check { id: String, index: usize, checked: bool },
    /// `slide:ID=N`
    Slide { id: String, value: i64 },
    /// `date:ID=YYYY-MM-DD`
    Date { id: String, date: NaiveDate },
}

impl Step {
    /// Run the step. Action failures are already shown through the host, so
    /// only rejected edits come back as errors.
    pub fn apply(&self, session: &mut Session, host: &mut dyn Host) -> Result<(), EditError> {
        match self {
            Step::Click(id) => {
                let _ = session.click(host, id);
            }
            Step::Tick { timer, times } => {
                for _ in 0..*times {
                    let _ = session.tick(host, timer);
                }
            }
            Step::Set { id, text } => session.set_text(id, text.as_str())?,
            Step::Select { id, index } => session.select_option(id, *index)?,
            Step::Check { id, index, checked } => session.set_checked(id, *index, *checked)?,
            Step::Slide { id, value } => session.set_value(id, *value)?,
            Step::Date { id, date } => session.select_date(id, *date)?,
        }
        Ok(())
    }
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = s
            .split_once(':')
            .ok_or_else(|| format!("expected `kind:target`, got `{s}`"))?;

        let assignment = || {
            rest.split_once('=')
                .ok_or_else(|| format!("`{kind}` needs `ID=VALUE`, got `{rest}`"))
        };
        let number = |raw: &str| {
            raw.trim()
                .parse::<usize>()
                .map_err(|_| format!("`{kind}`: `{raw}` is not a number"))
        };

        let step = match kind {
            "click" => Step::Click(rest.to_string()),
            "tick" => match rest.split_once('*') {
                Some((timer, times)) => Step::Tick {
                    timer: timer.to_string(),
                    times: times.trim().parse().map_err(|_| format!("bad repeat count `{times}`"))?,
                },
                None => Step::Tick { timer: rest.to_string(), times: 1 },
            },
            "set" => {
                let (id, text) = assignment()?;
                Step::Set { id: id.to_string(), text: text.to_string() }
            }
            "select" => {
                let (id, index) = assignment()?;
                Step::Select { id: id.to_string(), index: number(index)? }
            }
            "check" | "uncheck" => {
                let (id, index) = assignment()?;
                Step::Check { id: id.to_string(), index: number(index)?, checked: kind == "check" }
            }
            "slide" => {
                let (id, value) = assignment()?;
                Step::Slide {
                    id: id.to_string(),
                    value: value.trim().parse().map_err(|_| format!("`slide`: `{value}` is not a number"))?,
                }
            }
            "date" => {
                let (id, date) = assignment()?;
                Step::Date {
                    id: id.to_string(),
                    date: NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
                        .map_err(|e| format!("`date`: {e}"))?,
                }
            }
            other => return Err(format!("unknown event kind `{other}`")),
        };
        Ok(step)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Click(id) => write!(f, "click:{id}"),
            Step::Tick { timer, times: 1 } => write!(f, "tick:{timer}"),
            Step::Tick { timer, times } => write!(f, "tick:{timer}*{times}"),
            Step::Set { id, text } => write!(f, "set:{id}={text}"),
            Step::Select { id, index } => write!(f, "select:{id}={index}"),
            Step::Check { id, index, checked: true } => write!(f, "check:{id}={index}"),
            Step::Check { id, index, checked: false } => write!(f, "uncheck:{id}={index}"),
            Step::Slide { id, value } => write!(f, "slide:{id}={value}"),
            Step::Date { id, date } => write!(f, "date:{id}={}", date.format("%Y-%m-%d")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn click() {
        assert_eq!("click:b1".parse::<Step>(), Ok(Step::Click("b1".into())));
    }

    #[test] fn tick_with_repeat() {
        assert_eq!("tick:t1*3".parse::<Step>(), Ok(Step::Tick { timer: "t1".into(), times: 3 }));
        assert_eq!("tick:t1".parse::<Step>(), Ok(Step::Tick { timer: "t1".into(), times: 1 }));
    }

    #[test] fn set_keeps_everything_after_the_first_equals() {
        assert_eq!("set:e1=a=b".parse::<Step>(), Ok(Step::Set { id: "e1".into(), text: "a=b".into() }));
    }

    #[test] fn toggles() {
        assert_eq!("uncheck:c1=2".parse::<Step>(), Ok(Step::Check { id: "c1".into(), index: 2, checked: false }));
        assert_eq!("select:r1=0".parse::<Step>(), Ok(Step::Select { id: "r1".into(), index: 0 }));
    }

    #[test] fn slide_accepts_negative() {
        assert_eq!("slide:s1=-4".parse::<Step>(), Ok(Step::Slide { id: "s1".into(), value: -4 }));
    }

    #[test] fn date() {
        let step: Step = "date:d1=2024-02-29".parse().unwrap();
        assert_eq!(step.to_string(), "date:d1=2024-02-29");
    }

    #[test] fn rejects() {
        assert!("b1".parse::<Step>().is_err());
        assert!("poke:b1".parse::<Step>().is_err());
        assert!("select:r1".parse::<Step>().is_err());
        assert!("select:r1=x".parse::<Step>().is_err());
        assert!("date:d1=2023-02-29".parse::<Step>().is_err());
    }
}
