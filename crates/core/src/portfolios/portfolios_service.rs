//! Ledger service.

use std::sync::{Arc, RwLock};

use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::ledger;
use super::portfolios_errors::PortfolioError;
use super::portfolios_model::{
    Holding, HoldingUpdate, NewHolding, NewTransaction, Portfolio, PortfolioPerformance,
    PortfolioState, PortfolioSummary, PortfolioUpdate, Transaction, TransactionUpdate,
};
use super::portfolios_traits::{PortfolioServiceTrait, PortfolioStoreTrait};
use crate::errors::Result;

/// Service maintaining the ledger state.
///
/// State lives in memory behind an `RwLock` and is persisted through the
/// injected store on every mutation. Mutations work on a copy of the
/// state and commit it only after a successful persist, so a failed write
/// leaves both memory and disk on the previous consistent state.
pub struct PortfolioService {
    state: RwLock<PortfolioState>,
    store: Arc<dyn PortfolioStoreTrait>,
}

impl PortfolioService {
    /// Creates the service, loading the persisted state.
    pub fn new(store: Arc<dyn PortfolioStoreTrait>) -> Result<Self> {
        let state = store.load()?;
        Ok(Self {
            state: RwLock::new(state),
            store,
        })
    }

    fn mutate<T>(&self, op: impl FnOnce(&mut PortfolioState) -> Result<T>) -> Result<T> {
        let mut guard = self.state.write().unwrap();
        let mut working = guard.clone();
        let value = op(&mut working)?;
        self.store.save(&working)?;
        *guard = working;
        Ok(value)
    }

    fn read<T>(&self, op: impl FnOnce(&PortfolioState) -> T) -> T {
        let guard = self.state.read().unwrap();
        op(&guard)
    }
}

fn portfolio_mut<'a>(
    state: &'a mut PortfolioState,
    portfolio_id: &str,
) -> Result<&'a mut Portfolio> {
    state
        .portfolios
        .iter_mut()
        .find(|p| p.id == portfolio_id)
        .ok_or_else(|| PortfolioError::PortfolioNotFound(portfolio_id.to_string()).into())
}

fn holding_mut<'a>(portfolio: &'a mut Portfolio, holding_id: &str) -> Result<&'a mut Holding> {
    portfolio
        .holdings
        .iter_mut()
        .find(|h| h.id == holding_id)
        .ok_or_else(|| PortfolioError::HoldingNotFound(holding_id.to_string()).into())
}

/// Recompute the holding from its transactions, then cascade to the
/// portfolio aggregates and bump the update timestamp.
fn cascade_after_transaction_change(portfolio: &mut Portfolio, holding_id: &str) -> Result<()> {
    let holding = holding_mut(portfolio, holding_id)?;
    ledger::recompute_from_transactions(holding);
    ledger::recompute_portfolio(portfolio);
    portfolio.last_updated = Utc::now();
    Ok(())
}

impl PortfolioServiceTrait for PortfolioService {
    fn create_portfolio(
        &self,
        name: &str,
        currency: &str,
        description: Option<String>,
    ) -> Result<Portfolio> {
        debug!("Creating portfolio '{}' ({})", name, currency);
        let now = Utc::now();
        let portfolio = Portfolio {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description,
            total_value: Decimal::ZERO,
            currency: currency.to_string(),
            created_at: now,
            last_updated: now,
            holdings: Vec::new(),
            performance: PortfolioPerformance::default(),
        };

        self.mutate(|state| {
            state.portfolios.push(portfolio.clone());
            state.active_portfolio_id = Some(portfolio.id.clone());
            Ok(portfolio.clone())
        })
    }

    fn update_portfolio(&self, id: &str, update: PortfolioUpdate) -> Result<Portfolio> {
        self.mutate(|state| {
            let portfolio = portfolio_mut(state, id)?;
            if let Some(name) = update.name {
                portfolio.name = name;
            }
            if let Some(description) = update.description {
                portfolio.description = Some(description);
            }
            if let Some(currency) = update.currency {
                portfolio.currency = currency;
            }
            portfolio.last_updated = Utc::now();
            Ok(portfolio.clone())
        })
    }

    fn delete_portfolio(&self, id: &str) -> Result<()> {
        debug!("Deleting portfolio {}", id);
        self.mutate(|state| {
            let before = state.portfolios.len();
            state.portfolios.retain(|p| p.id != id);
            if state.portfolios.len() == before {
                return Err(PortfolioError::PortfolioNotFound(id.to_string()).into());
            }
            if state.active_portfolio_id.as_deref() == Some(id) {
                state.active_portfolio_id = None;
            }
            Ok(())
        })
    }

    fn set_active_portfolio(&self, id: Option<&str>) -> Result<()> {
        self.mutate(|state| {
            if let Some(id) = id {
                portfolio_mut(state, id)?;
            }
            state.active_portfolio_id = id.map(str::to_string);
            Ok(())
        })
    }

    fn get_portfolio(&self, id: &str) -> Result<Portfolio> {
        self.read(|state| {
            state
                .portfolios
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| PortfolioError::PortfolioNotFound(id.to_string()).into())
        })
    }

    fn list_portfolios(&self) -> Result<Vec<Portfolio>> {
        Ok(self.read(|state| state.portfolios.clone()))
    }

    fn active_portfolio(&self) -> Result<Option<Portfolio>> {
        Ok(self.read(|state| {
            state.active_portfolio_id.as_ref().and_then(|id| {
                state.portfolios.iter().find(|p| &p.id == id).cloned()
            })
        }))
    }

    fn add_holding(&self, portfolio_id: &str, draft: NewHolding) -> Result<Holding> {
        self.mutate(|state| {
            let portfolio = portfolio_mut(state, portfolio_id)?;

            let mut holding = Holding {
                id: Uuid::new_v4().to_string(),
                asset: draft.asset,
                quantity: draft.quantity,
                average_buy_price: draft.average_buy_price,
                current_price: draft.current_price,
                value: Decimal::ZERO,
                allocation: Decimal::ZERO,
                holding_return: Default::default(),
                transactions: Vec::new(),
            };
            ledger::refresh_valuation(&mut holding);
            debug!(
                "Adding holding {} ({}) to portfolio {}",
                holding.id, holding.asset.symbol, portfolio_id
            );

            portfolio.holdings.push(holding.clone());
            ledger::recompute_portfolio(portfolio);
            portfolio.last_updated = Utc::now();

            // Allocation was derived during the recompute; return the
            // stored copy.
            let stored = portfolio
                .holdings
                .last()
                .cloned()
                .unwrap_or(holding);
            Ok(stored)
        })
    }

    fn update_holding(
        &self,
        portfolio_id: &str,
        holding_id: &str,
        patch: HoldingUpdate,
    ) -> Result<Holding> {
        self.mutate(|state| {
            let portfolio = portfolio_mut(state, portfolio_id)?;
            let holding = holding_mut(portfolio, holding_id)?;

            if let Some(quantity) = patch.quantity {
                holding.quantity = quantity;
            }
            if let Some(average_buy_price) = patch.average_buy_price {
                holding.average_buy_price = average_buy_price;
            }
            if let Some(current_price) = patch.current_price {
                holding.current_price = current_price;
            }
            ledger::refresh_valuation(holding);

            ledger::recompute_portfolio(portfolio);
            portfolio.last_updated = Utc::now();

            let stored = portfolio
                .holdings
                .iter()
                .find(|h| h.id == holding_id)
                .cloned()
                .ok_or_else(|| PortfolioError::HoldingNotFound(holding_id.to_string()))?;
            Ok(stored)
        })
    }

    fn remove_holding(&self, portfolio_id: &str, holding_id: &str) -> Result<()> {
        debug!("Removing holding {} from portfolio {}", holding_id, portfolio_id);
        self.mutate(|state| {
            let portfolio = portfolio_mut(state, portfolio_id)?;
            let before = portfolio.holdings.len();
            portfolio.holdings.retain(|h| h.id != holding_id);
            if portfolio.holdings.len() == before {
                return Err(PortfolioError::HoldingNotFound(holding_id.to_string()).into());
            }
            ledger::recompute_portfolio(portfolio);
            portfolio.last_updated = Utc::now();
            Ok(())
        })
    }

    fn add_transaction(
        &self,
        portfolio_id: &str,
        holding_id: &str,
        tx: NewTransaction,
    ) -> Result<Transaction> {
        self.mutate(|state| {
            let portfolio = portfolio_mut(state, portfolio_id)?;
            let transaction = Transaction {
                id: Uuid::new_v4().to_string(),
                date: tx.date,
                side: tx.side,
                quantity: tx.quantity,
                price: tx.price,
                fee: tx.fee,
                notes: tx.notes,
            };

            let holding = holding_mut(portfolio, holding_id)?;
            holding.transactions.push(transaction.clone());
            cascade_after_transaction_change(portfolio, holding_id)?;
            Ok(transaction)
        })
    }

    fn update_transaction(
        &self,
        portfolio_id: &str,
        holding_id: &str,
        transaction_id: &str,
        patch: TransactionUpdate,
    ) -> Result<Transaction> {
        self.mutate(|state| {
            let portfolio = portfolio_mut(state, portfolio_id)?;
            let holding = holding_mut(portfolio, holding_id)?;
            let transaction = holding
                .transactions
                .iter_mut()
                .find(|t| t.id == transaction_id)
                .ok_or_else(|| PortfolioError::TransactionNotFound(transaction_id.to_string()))?;

            if let Some(date) = patch.date {
                transaction.date = date;
            }
            if let Some(side) = patch.side {
                transaction.side = side;
            }
            if let Some(quantity) = patch.quantity {
                transaction.quantity = quantity;
            }
            if let Some(price) = patch.price {
                transaction.price = price;
            }
            if let Some(fee) = patch.fee {
                transaction.fee = Some(fee);
            }
            if let Some(notes) = patch.notes {
                transaction.notes = Some(notes);
            }
            let updated = transaction.clone();

            cascade_after_transaction_change(portfolio, holding_id)?;
            Ok(updated)
        })
    }

    fn remove_transaction(
        &self,
        portfolio_id: &str,
        holding_id: &str,
        transaction_id: &str,
    ) -> Result<()> {
        self.mutate(|state| {
            let portfolio = portfolio_mut(state, portfolio_id)?;
            let holding = holding_mut(portfolio, holding_id)?;
            let before = holding.transactions.len();
            holding.transactions.retain(|t| t.id != transaction_id);
            if holding.transactions.len() == before {
                return Err(
                    PortfolioError::TransactionNotFound(transaction_id.to_string()).into(),
                );
            }

            cascade_after_transaction_change(portfolio, holding_id)?;
            Ok(())
        })
    }

    fn summary(&self, portfolio_id: &str) -> Result<PortfolioSummary> {
        let portfolio = self.get_portfolio(portfolio_id)?;
        Ok(ledger::summarize(&portfolio))
    }
}
