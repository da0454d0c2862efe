//! Interactive collection of a [`TaxpayerProfile`].
//!
//! Every question repeats until it gets a usable answer. The prompter is
//! generic over its input and output so sessions can be scripted in tests.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use tax_core::{FilingStatus, ProfileError, TaxYearConfig, TaxpayerProfile};
use thiserror::Error;
use tracing::debug;

use crate::summary::to_currency;
use crate::utils::{parse_amount, parse_child_count, parse_non_negative_amount, parse_yes_no};

const OUT_OF_RANGE_MESSAGE: &str = "That amount is too large. Please enter a smaller number.";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("I/O error while prompting: {0}")]
    Io(#[from] io::Error),

    #[error("input ended before the profile was complete")]
    EndOfInput,
}

pub struct Prompter<'c, R, W> {
    input: R,
    output: W,
    config: &'c TaxYearConfig,
}

impl<'c, R: BufRead, W: Write> Prompter<'c, R, W> {
    pub fn new(
        input: R,
        output: W,
        config: &'c TaxYearConfig,
    ) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Runs the full question sequence and returns the taxpayer's name
    /// with the assembled profile.
    pub fn collect_profile(&mut self) -> Result<(String, TaxpayerProfile), PromptError> {
        let name = self.ask("Hello, What is your name? ")?;

        let citizen = self.ask_yes_no(
            &format!("Hello {name}, are you a U.S citizen? (Enter Y or N) "),
            &format!("{name}, are you a U.S citizen? (Enter Y or N) "),
        )?;

        let filing_status = self.ask_filing_status(&name)?;
        let standard_deduction = if citizen {
            let deduction = self.config.standard_deduction(filing_status);
            self.say(&format!(
                "Thank you {name}, you are eligible for standard deduction."
            ))?;
            self.say(&format!(
                "Thank you {name}, your standard deduction for {filing_status} is {}.",
                to_currency(deduction)
            ))?;
            deduction
        } else {
            self.say(&format!(
                "Sorry {name}, you are not qualified for standard deduction (or must itemize)."
            ))?;
            Decimal::ZERO
        };
        self.say("")?;

        let salary = self.ask_salary(&name)?;
        let (short_term_gain, long_term_gain) = self.ask_investments(&name)?;
        let qualifying_children = self.ask_children(&name)?;

        self.say(&"-".repeat(30))?;
        self.say(&format!(
            "{name}, check Box 2 of your W-2 forms and any 1099s."
        ))?;
        let withholding = self.ask_non_negative(
            "Enter the total Federal Income Tax Withheld: ",
            "withholding",
            "Amount cannot be negative.",
            "Please enter a number.",
        )?;

        let profile = TaxpayerProfile {
            filing_status,
            salary,
            short_term_gain,
            long_term_gain,
            standard_deduction,
            qualifying_children,
            withholding,
        };
        debug!(?profile, "collected profile");
        Ok((name, profile))
    }

    fn ask_filing_status(
        &mut self,
        name: &str,
    ) -> Result<FilingStatus, PromptError> {
        let mut answer = self.ask(&format!(
            "{name}, what is your marital status? \
             (Enter S for single, M for married, or H for head of household): "
        ))?;
        loop {
            // Only the single-letter codes are accepted here.
            let status = match answer.to_ascii_lowercase().as_str() {
                "s" => Some(FilingStatus::Single),
                "m" => Some(FilingStatus::MarriedFilingJointly),
                "h" => Some(FilingStatus::HeadOfHousehold),
                _ => None,
            };
            if let Some(status) = status {
                return Ok(status);
            }
            self.say("Invalid input. Please enter S, M, or H.")?;
            answer = self.ask(&format!(
                "{name}, please re-enter your marital status (S/M/H): "
            ))?;
        }
    }

    fn ask_salary(
        &mut self,
        name: &str,
    ) -> Result<Decimal, PromptError> {
        let question = format!("{name}, do you have a salary this year? (Enter Y or N) ");
        if !self.ask_yes_no(&question, &question)? {
            self.say(&format!(
                "Thank you {name}, you have indicated that you do not have a salary this year."
            ))?;
            return Ok(Decimal::ZERO);
        }

        loop {
            let salary = self.ask_non_negative(
                "What is the amount of your salary this year? ",
                "salary",
                "Invalid amount. Salary cannot be negative.",
                "Please enter numbers only.",
            )?;
            let confirm = self.ask(&format!(
                "You entered {}. Is that correct? (Enter Y or N): ",
                to_currency(salary)
            ))?;
            match confirm.to_ascii_lowercase().as_str() {
                "y" => return Ok(salary),
                "n" => continue,
                _ => self.say("Invalid choice. Restarting salary entry.")?,
            }
        }
    }

    fn ask_investments(
        &mut self,
        name: &str,
    ) -> Result<(Decimal, Decimal), PromptError> {
        let question = format!("{name}, did you sell any stock or property this year? (Y/N) ");
        if !self.ask_yes_no(&question, &question)? {
            return Ok((Decimal::ZERO, Decimal::ZERO));
        }

        let short_term = self.ask_signed(
            "Please enter your net short-term capital gains (enter 0 if none): ",
            "short-term gain",
        )?;
        let long_term = self.ask_signed(
            "Enter your Net Long-Term Capital Gains (enter 0 if none): ",
            "long-term gain",
        )?;
        self.say(&format!(
            "Your Short-Term investment is: {}",
            to_currency(short_term)
        ))?;
        self.say(&format!(
            "Your Long-Term investment  is: {}",
            to_currency(long_term)
        ))?;
        Ok((short_term, long_term))
    }

    fn ask_children(
        &mut self,
        name: &str,
    ) -> Result<u32, PromptError> {
        let has_children = self.ask_yes_no(
            &format!("{name}, do you have any children? (Y/N) "),
            &format!("{name}, do you have any children or dependents? (Y/N) "),
        )?;
        if !has_children {
            self.say(&format!(
                "Thank you {name}, you have indicated that you do not have any children or dependents."
            ))?;
            return Ok(0);
        }

        loop {
            let answer = self.ask(&format!(
                "{name}, how many qualifying children under age 17 do you have? "
            ))?;
            if answer.is_empty() {
                self.say("Invalid input. Please enter a number.")?;
                continue;
            }
            match parse_child_count(&answer) {
                Ok(count) => return Ok(count),
                Err(_) if answer.parse::<i64>().is_ok() => {
                    self.say("Please enter a positive number.")?;
                }
                Err(_) => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }

    fn ask_yes_no(
        &mut self,
        question: &str,
        retry_question: &str,
    ) -> Result<bool, PromptError> {
        let mut answer = self.ask(question)?;
        loop {
            if let Some(value) = parse_yes_no(&answer) {
                return Ok(value);
            }
            self.say("Invalid input. Please enter Y or N.")?;
            answer = self.ask(retry_question)?;
        }
    }

    fn ask_non_negative(
        &mut self,
        question: &str,
        field: &'static str,
        negative_message: &str,
        invalid_message: &str,
    ) -> Result<Decimal, PromptError> {
        loop {
            let answer = self.ask(question)?;
            if answer.is_empty() {
                self.say(invalid_message)?;
                continue;
            }
            match parse_non_negative_amount(field, &answer) {
                Ok(value) => return Ok(value),
                Err(ProfileError::InvalidAmount { .. }) => self.say(negative_message)?,
                Err(ProfileError::AmountOutOfRange { .. }) => self.say(OUT_OF_RANGE_MESSAGE)?,
                Err(_) => self.say(invalid_message)?,
            }
        }
    }

    fn ask_signed(
        &mut self,
        question: &str,
        field: &'static str,
    ) -> Result<Decimal, PromptError> {
        loop {
            let answer = self.ask(question)?;
            if answer.is_empty() {
                self.say("Invalid input. Please enter a numeric value.")?;
                continue;
            }
            match parse_amount(field, &answer) {
                Ok(value) => return Ok(value),
                Err(ProfileError::AmountOutOfRange { .. }) => self.say(OUT_OF_RANGE_MESSAGE)?,
                Err(_) => self.say("Invalid input. Please enter a numeric value.")?,
            }
        }
    }

    /// Writes `question` and reads one trimmed line of input.
    fn ask(
        &mut self,
        question: &str,
    ) -> Result<String, PromptError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn say(
        &mut self,
        message: &str,
    ) -> Result<(), PromptError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn run(script: &str) -> (Result<(String, TaxpayerProfile), PromptError>, String) {
        let config = TaxYearConfig::tax_year_2025();
        let mut output = Vec::new();
        let result = {
            let mut prompter = Prompter::new(Cursor::new(script.as_bytes()), &mut output, &config);
            prompter.collect_profile()
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn collects_a_complete_profile() {
        let script = "Ada\ny\nm\ny\n300,000\ny\ny\n0\n50000\ny\n2\n40000\n";

        let (result, _) = run(script);
        let (name, profile) = result.unwrap();

        assert_eq!(name, "Ada");
        assert_eq!(profile.filing_status, FilingStatus::MarriedFilingJointly);
        assert_eq!(profile.standard_deduction, dec!(31500));
        assert_eq!(profile.salary, dec!(300000));
        assert_eq!(profile.short_term_gain, Decimal::ZERO);
        assert_eq!(profile.long_term_gain, dec!(50000));
        assert_eq!(profile.qualifying_children, 2);
        assert_eq!(profile.withholding, dec!(40000));
    }

    #[test]
    fn non_citizen_gets_no_standard_deduction() {
        let script = "Bo\nn\nS\nn\nn\nno\n0\n";

        let (result, output) = run(script);
        let (_, profile) = result.unwrap();

        assert_eq!(profile.filing_status, FilingStatus::Single);
        assert_eq!(profile.standard_deduction, Decimal::ZERO);
        assert_eq!(profile.salary, Decimal::ZERO);
        assert_eq!(profile.qualifying_children, 0);
        assert!(output.contains("not qualified for standard deduction"));
    }

    #[test]
    fn invalid_answers_are_asked_again() {
        let script = "Cy\nmaybe\ny\nx\nh\ny\n-5\nabc\n1000\nn\n2000\ny\nn\nyes\n-1\ntwo\n1\n-3\n0\n";

        let (result, output) = run(script);
        let (_, profile) = result.unwrap();

        assert_eq!(profile.filing_status, FilingStatus::HeadOfHousehold);
        assert_eq!(profile.standard_deduction, dec!(23625));
        assert_eq!(profile.salary, dec!(2000));
        assert_eq!(profile.qualifying_children, 1);
        assert_eq!(profile.withholding, Decimal::ZERO);
        assert!(output.contains("Invalid input. Please enter Y or N."));
        assert!(output.contains("Invalid input. Please enter S, M, or H."));
        assert!(output.contains("Invalid amount. Salary cannot be negative."));
        assert!(output.contains("Please enter numbers only."));
        assert!(output.contains("Please enter a positive number."));
        assert!(output.contains("Invalid input. Please enter a number."));
        assert!(output.contains("Amount cannot be negative."));
    }

    #[test]
    fn filing_status_takes_single_letters_only() {
        let script = "Ed\ny\nsingle\nMFJ\nM\nn\nn\nn\n0\n";

        let (result, output) = run(script);
        let (_, profile) = result.unwrap();

        assert_eq!(profile.filing_status, FilingStatus::MarriedFilingJointly);
        assert_eq!(
            output
                .matches("Invalid input. Please enter S, M, or H.")
                .count(),
            2
        );
    }

    #[test]
    fn oversized_amounts_are_asked_again() {
        let huge = "79228162514264337593543950335";
        let script =
            format!("Fy\ny\ns\ny\n{huge}\n50000\ny\ny\n{huge}\n100\n0\nn\n{huge}\n0\n");

        let (result, output) = run(&script);
        let (_, profile) = result.unwrap();

        assert_eq!(profile.salary, dec!(50000));
        assert_eq!(profile.short_term_gain, dec!(100));
        assert_eq!(profile.withholding, Decimal::ZERO);
        assert_eq!(output.matches(OUT_OF_RANGE_MESSAGE).count(), 3);
    }

    #[test]
    fn investment_losses_are_kept_signed() {
        let script = "Di\ny\ns\nn\ny\n-3,000\n-1500.50\nn\n0\n";

        let (result, output) = run(script);
        let (_, profile) = result.unwrap();

        assert_eq!(profile.short_term_gain, dec!(-3000));
        assert_eq!(profile.long_term_gain, dec!(-1500.50));
        assert!(output.contains("Your Short-Term investment is: $(3,000.00)"));
    }

    #[test]
    fn end_of_input_is_an_error() {
        let (result, _) = run("Ed\ny\n");

        assert!(matches!(result, Err(PromptError::EndOfInput)));
    }
}
