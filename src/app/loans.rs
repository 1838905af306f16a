//! Loan applications, EMI schedules and EMI payment.

use super::App;
use crate::api::{LoanApplication, PayEmiRequest};
use crate::utils::format_money;
use eframe::egui;

impl App {
    pub fn load_loans(&mut self, ctx: &egui::Context) {
        let api = self.api.clone();
        self.spawn_into(ctx, &self.loans_slot.clone(), async move {
            api.get_user_loans().await
        });
    }

    pub fn start_apply_loan(&mut self, ctx: &egui::Context) {
        let Some(account_number) = self.loan_account.clone() else {
            self.apply_loan_slot.set(crate::types::Remote::Failed(
                "Choose the account to link the loan to.".into(),
            ));
            return;
        };
        let (loan_amount, tenure_months) =
            match validate_loan_terms(&self.loan_amount, &self.loan_tenure) {
                Ok(terms) => terms,
                Err(message) => {
                    self.apply_loan_slot.set(crate::types::Remote::Failed(message));
                    return;
                }
            };
        let api = self.api.clone();
        let application = LoanApplication {
            loan_type: self.loan_type.to_string(),
            loan_amount,
            tenure_months,
            account_number,
        };
        self.spawn_into(ctx, &self.apply_loan_slot.clone(), async move {
            api.apply_for_loan(&application).await
        });
    }

    pub fn load_schedule(&mut self, ctx: &egui::Context, loan_id: i64) {
        self.schedule_loan_id = Some(loan_id);
        self.schedule_slot = super::Slot::default();
        let api = self.api.clone();
        self.spawn_into(ctx, &self.schedule_slot.clone(), async move {
            api.get_emi_schedule(loan_id).await
        });
    }

    pub fn start_pay_emi(&mut self, ctx: &egui::Context, loan_id: i64, installment_number: i32) {
        let api = self.api.clone();
        let request = PayEmiRequest { installment_number };
        self.spawn_into(ctx, &self.pay_emi_slot.clone(), async move {
            api.pay_emi(loan_id, &request).await
        });
    }

    pub fn poll_loans(&mut self, ctx: &egui::Context) {
        if let Some(loan) = self.apply_loan_slot.take_ready() {
            self.show_loan_form = false;
            self.loan_amount.clear();
            self.show_toast(format!(
                "Application received: EMI {}/month.",
                format_money(loan.emi_amount)
            ));
            self.load_loans(ctx);
        }

        if let Some(loan) = self.pay_emi_slot.take_ready() {
            self.show_toast("EMI paid.");
            self.load_loans(ctx);
            // Refresh the open schedule so the row flips to PAID
            if self.schedule_loan_id == Some(loan.id) {
                self.load_schedule(ctx, loan.id);
            }
            self.load_accounts(ctx);
        }
    }
}

fn validate_loan_terms(amount: &str, tenure: &str) -> Result<(f64, i32), String> {
    let amount = super::banking::parse_amount(amount)?;
    let Ok(tenure) = tenure.trim().parse::<i32>() else {
        return Err("Enter a valid tenure.".to_string());
    };
    if tenure <= 0 {
        return Err("Amount and tenure must be positive.".to_string());
    }
    if tenure as u32 > crate::emi::MAX_TENURE_MONTHS {
        return Err("Tenure cannot exceed 600 months.".to_string());
    }
    Ok((amount, tenure))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loan_terms_are_bounded() {
        assert_eq!(validate_loan_terms("250000", "60"), Ok((250000.0, 60)));
        assert!(validate_loan_terms("", "60").is_err());
        assert!(validate_loan_terms("-1", "60").is_err());
        assert!(validate_loan_terms("250000", "zero").is_err());
        assert_eq!(
            validate_loan_terms("250000", "0"),
            Err("Amount and tenure must be positive.".to_string())
        );
        assert_eq!(
            validate_loan_terms("250000", "601"),
            Err("Tenure cannot exceed 600 months.".to_string())
        );
    }
}
