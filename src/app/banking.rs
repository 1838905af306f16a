//! Accounts, cash movement, transfers and beneficiaries.

use super::App;
use crate::api::{BeneficiaryRequest, CashRequest, CreateAccountRequest};
use crate::types::TransferRequest;
use crate::utils::format_money;
use eframe::egui;
use tracing::info;

impl App {
    pub fn load_accounts(&mut self, ctx: &egui::Context) {
        let api = self.api.clone();
        self.spawn_into(ctx, &self.accounts_slot.clone(), async move {
            api.get_user_accounts().await
        });
    }

    pub fn start_create_account(&mut self, ctx: &egui::Context) {
        let initial_deposit = match parse_initial_deposit(&self.new_account_deposit) {
            Ok(amount) => amount,
            Err(message) => {
                self.create_account_slot
                    .set(crate::types::Remote::Failed(message));
                return;
            }
        };
        let api = self.api.clone();
        let request = CreateAccountRequest {
            account_type: self.new_account_type.to_string(),
            initial_deposit,
        };
        self.spawn_into(ctx, &self.create_account_slot.clone(), async move {
            api.create_account(&request).await
        });
    }

    pub fn load_history(&mut self, ctx: &egui::Context) {
        let Some(account) = self.history_account.clone() else {
            return;
        };
        let api = self.api.clone();
        let range = if self.history_filter_on
            && !self.history_start_date.trim().is_empty()
            && !self.history_end_date.trim().is_empty()
        {
            match validate_date_range(&self.history_start_date, &self.history_end_date) {
                Ok(range) => Some(range),
                Err(message) => {
                    self.history_slot.set(crate::types::Remote::Failed(message));
                    return;
                }
            }
        } else {
            None
        };
        self.spawn_into(ctx, &self.history_slot.clone(), async move {
            match range {
                Some((start, end)) => {
                    api.transaction_history_between(&account, &start, &end).await
                }
                None => api.transaction_history(&account).await,
            }
        });
    }

    pub fn start_cash_movement(&mut self, ctx: &egui::Context) {
        let Some(account_number) = self.cash_account.clone() else {
            return;
        };
        let amount = match parse_amount(&self.cash_amount) {
            Ok(amount) => amount,
            Err(message) => {
                self.cash_slot.set(crate::types::Remote::Failed(message));
                return;
            }
        };
        let api = self.api.clone();
        let deposit = self.cash_deposit_mode;
        let request = CashRequest {
            account_number,
            amount,
            description: non_empty(&self.cash_description),
        };
        self.spawn_into(ctx, &self.cash_slot.clone(), async move {
            if deposit {
                api.deposit(&request).await
            } else {
                api.withdraw(&request).await
            }
        });
    }

    pub fn start_transfer(&mut self, ctx: &egui::Context) {
        let Some(from) = self.transfer_from.clone() else {
            return;
        };
        let (to, amount) = match validate_transfer(&from, &self.transfer_to, &self.transfer_amount)
        {
            Ok(validated) => validated,
            Err(message) => {
                self.transfer_slot.set(crate::types::Remote::Failed(message));
                return;
            }
        };
        info!(amount = %format_money(amount), "Starting transfer");
        let api = self.api.clone();
        let request = TransferRequest {
            from_account_number: from,
            to_account_number: to,
            amount,
            description: non_empty(&self.transfer_description),
        };
        self.spawn_into(ctx, &self.transfer_slot.clone(), async move {
            api.transfer(&request).await
        });
    }

    pub fn load_beneficiaries(&mut self, ctx: &egui::Context) {
        let api = self.api.clone();
        self.spawn_into(ctx, &self.beneficiaries_slot.clone(), async move {
            api.get_beneficiaries().await
        });
    }

    pub fn start_add_beneficiary(&mut self, ctx: &egui::Context) {
        let request = BeneficiaryRequest {
            nickname: self.beneficiary_nickname.trim().to_string(),
            account_number: self.beneficiary_account.trim().to_string(),
            bank_name: self.beneficiary_bank.trim().to_string(),
            ifsc_code: self.beneficiary_ifsc.trim().to_uppercase(),
        };
        if request.nickname.is_empty() || request.account_number.is_empty() {
            self.add_beneficiary_slot.set(crate::types::Remote::Failed(
                "Nickname and account number are required.".into(),
            ));
            return;
        }
        let api = self.api.clone();
        self.spawn_into(ctx, &self.add_beneficiary_slot.clone(), async move {
            api.add_beneficiary(&request).await
        });
    }

    pub fn start_delete_beneficiary(&mut self, ctx: &egui::Context, id: i64) {
        let api = self.api.clone();
        self.spawn_into(ctx, &self.delete_beneficiary_slot.clone(), async move {
            api.delete_beneficiary(id).await
        });
    }

    /// Consume finished banking requests: refresh lists, close forms, toast.
    pub fn poll_banking(&mut self, ctx: &egui::Context) {
        if let Some(account) = self.create_account_slot.take_ready() {
            self.show_create_account = false;
            self.new_account_deposit.clear();
            self.show_toast(format!("Account {} opened.", account.account_number));
            self.load_accounts(ctx);
        }

        if let Some(tx) = self.cash_slot.take_ready() {
            self.cash_amount.clear();
            self.cash_description.clear();
            self.show_toast(format!(
                "{} of {} complete.",
                if self.cash_deposit_mode {
                    "Deposit"
                } else {
                    "Withdrawal"
                },
                format_money(tx.amount)
            ));
            self.load_accounts(ctx);
            self.load_history(ctx);
        }

        if let Some(tx) = self.transfer_slot.take_ready() {
            self.transfer_amount.clear();
            self.transfer_description.clear();
            self.show_toast(format!("Transferred {}.", format_money(tx.amount)));
            self.load_accounts(ctx);
        }

        if let Some(beneficiary) = self.add_beneficiary_slot.take_ready() {
            self.show_add_beneficiary = false;
            self.beneficiary_nickname.clear();
            self.beneficiary_account.clear();
            self.beneficiary_bank.clear();
            self.beneficiary_ifsc.clear();
            self.show_toast(format!("Saved {}.", beneficiary.nickname));
            self.load_beneficiaries(ctx);
        }

        if self.delete_beneficiary_slot.take_ready().is_some() {
            self.show_toast("Beneficiary removed.");
            self.load_beneficiaries(ctx);
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a user-entered money amount. Deposits, withdrawals and
/// transfers all require a strictly positive value.
pub(crate) fn parse_amount(input: &str) -> Result<f64, String> {
    let Ok(amount) = input.trim().parse::<f64>() else {
        return Err("Enter a valid amount.".to_string());
    };
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be positive.".to_string());
    }
    Ok(amount)
}

/// An empty deposit field means opening with nothing, which is allowed.
fn parse_initial_deposit(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let Ok(amount) = trimmed.parse::<f64>() else {
        return Err("Enter a valid amount.".to_string());
    };
    if !amount.is_finite() || amount < 0.0 {
        return Err("Amount cannot be negative.".to_string());
    }
    Ok(amount)
}

fn validate_transfer(from: &str, to: &str, amount: &str) -> Result<(String, f64), String> {
    let to = to.trim();
    if to.is_empty() {
        return Err("Choose a destination account.".to_string());
    }
    let amount = parse_amount(amount)?;
    if from == to {
        return Err("Source and destination are the same account.".to_string());
    }
    Ok((to.to_string(), amount))
}

fn validate_date_range(start: &str, end: &str) -> Result<(String, String), String> {
    match (
        crate::utils::parse_date(start),
        crate::utils::parse_date(end),
    ) {
        (Some(start), Some(end)) if start <= end => Ok((start.to_string(), end.to_string())),
        (Some(_), Some(_)) => Err("Start date must be on or before the end date.".to_string()),
        _ => Err("Dates must be YYYY-MM-DD.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_must_be_positive_numbers() {
        assert_eq!(parse_amount("250.50"), Ok(250.5));
        assert_eq!(parse_amount(" 100 "), Ok(100.0));
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn initial_deposit_may_be_empty_or_zero() {
        assert_eq!(parse_initial_deposit(""), Ok(0.0));
        assert_eq!(parse_initial_deposit("0"), Ok(0.0));
        assert_eq!(parse_initial_deposit("1500"), Ok(1500.0));
        assert!(parse_initial_deposit("-1").is_err());
        assert!(parse_initial_deposit("abc").is_err());
    }

    #[test]
    fn transfers_need_a_distinct_destination() {
        assert_eq!(
            validate_transfer("AC1", "AC2", "100"),
            Ok(("AC2".to_string(), 100.0))
        );
        assert_eq!(
            validate_transfer("AC1", "", "100"),
            Err("Choose a destination account.".to_string())
        );
        assert_eq!(
            validate_transfer("AC1", "AC1", "100"),
            Err("Source and destination are the same account.".to_string())
        );
        assert_eq!(
            validate_transfer("AC1", "AC2", "-1"),
            Err("Amount must be positive.".to_string())
        );
        assert_eq!(
            validate_transfer("AC1", "AC2", "x"),
            Err("Enter a valid amount.".to_string())
        );
    }

    #[test]
    fn history_filter_needs_an_ordered_range() {
        assert_eq!(
            validate_date_range("2026-01-01", "2026-01-31"),
            Ok(("2026-01-01".to_string(), "2026-01-31".to_string()))
        );
        assert_eq!(
            validate_date_range("2026-02-01", "2026-01-01"),
            Err("Start date must be on or before the end date.".to_string())
        );
        assert_eq!(
            validate_date_range("01/02/2026", "2026-01-01"),
            Err("Dates must be YYYY-MM-DD.".to_string())
        );
    }
}
