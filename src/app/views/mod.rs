//! Screen rendering. One module per screen, all methods on `App`.

mod accounts;
mod admin;
mod beneficiaries;
mod dashboard;
mod emi_calculator;
mod kyc;
mod loans;
mod login;
mod transfer;
