use chrono::Datelike;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::models::analytics::{
    AllocationPoint, CashFlowBreakdown, CashSplitSummary, CumulativeProfitPoint,
    DiversificationScore, GoalProgress, GoalProjection, GrowthPoint, InvestmentSummary,
    MonthlyPerformance, MonthlyReturn, RebalanceEntry, SavingsRatePoint, Slice,
    VolatilityPoint, WealthSummary,
};
use crate::models::asset::AssetSnapshot;
use crate::models::cash::CashSourceRecord;
use crate::models::investment::InvestmentHolding;
use crate::models::timeline::MergedTimelinePoint;
use crate::models::wealth::WealthRecord;

/// Comments mentioning this word carry the period's salary.
const SALARY_KEYWORD: &str = "salariu";

fn first_integer() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("Invalid regex pattern"))
}

/// Percent change from `previous` to `current`; 0 when `previous` is 0.
fn percent_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous * 100.0
    }
}

/// `part / whole × 100`, 0 when `whole` is not positive.
fn share_pct(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Computes the derived dashboard metrics.
///
/// Every calculation is a pure function of its inputs. Empty and
/// single-point inputs produce zeros/defaults, never NaN or infinity.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    // ── Per-point series ────────────────────────────────────────────

    /// Period-over-period net-worth growth in percent.
    pub fn growth_series(&self, timeline: &[MergedTimelinePoint]) -> Vec<GrowthPoint> {
        timeline
            .iter()
            .enumerate()
            .map(|(idx, point)| {
                let growth = match idx {
                    0 => 0.0,
                    _ => percent_change(timeline[idx - 1].net_worth, point.net_worth),
                };
                GrowthPoint {
                    date: point.date,
                    net_worth: point.net_worth,
                    growth,
                }
            })
            .collect()
    }

    /// Investments / cash / assets as a share of net worth, rounded to 2 decimals.
    pub fn allocation_series(&self, timeline: &[MergedTimelinePoint]) -> Vec<AllocationPoint> {
        timeline
            .iter()
            .map(|point| {
                let total = point.net_worth;
                AllocationPoint {
                    date: point.date,
                    investments_pct: round2(share_pct(point.investments_value, total)),
                    cash_pct: round2(share_pct(point.cash_value, total)),
                    assets_pct: round2(share_pct(point.assets_total, total)),
                    total,
                }
            })
            .collect()
    }

    /// Absolute period change per point (first point and non-positive predecessors count as 0).
    pub fn volatility_series(&self, timeline: &[MergedTimelinePoint]) -> Vec<VolatilityPoint> {
        timeline
            .iter()
            .enumerate()
            .map(|(idx, point)| {
                let change = match idx {
                    0 => 0.0,
                    _ => {
                        let previous = timeline[idx - 1].net_worth;
                        if previous > 0.0 {
                            percent_change(previous, point.net_worth)
                        } else {
                            0.0
                        }
                    }
                };
                VolatilityPoint {
                    date: point.date,
                    change,
                    volatility: change.abs(),
                }
            })
            .collect()
    }

    pub fn average_volatility(&self, timeline: &[MergedTimelinePoint]) -> f64 {
        let values: Vec<f64> = self
            .volatility_series(timeline)
            .iter()
            .map(|p| p.volatility)
            .collect();
        mean(&values)
    }

    /// Running total of gain/loss over the history records.
    pub fn cumulative_profit(&self, history: &[WealthRecord]) -> Vec<CumulativeProfitPoint> {
        let mut cumulative = 0.0;
        history
            .iter()
            .map(|record| {
                cumulative += record.gain_loss;
                CumulativeProfitPoint {
                    date: record.date,
                    gain_loss: record.gain_loss,
                    cumulative,
                }
            })
            .collect()
    }

    /// Savings rate per history record, from the salary noted in its comment.
    pub fn savings_rate_series(&self, history: &[WealthRecord]) -> Vec<SavingsRatePoint> {
        history
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                if idx == 0 {
                    return SavingsRatePoint {
                        date: record.date,
                        savings_rate: 0.0,
                        salary: 0.0,
                        saved: 0.0,
                    };
                }

                let salary = Self::salary_from_comment(&record.comment);
                let saved = record.eur_amount - history[idx - 1].eur_amount - record.gain_loss;
                let rate = if salary > 0.0 {
                    saved / salary * 100.0
                } else {
                    0.0
                };

                SavingsRatePoint {
                    date: record.date,
                    savings_rate: rate.clamp(0.0, 100.0),
                    salary,
                    saved,
                }
            })
            .collect()
    }

    pub fn average_savings_rate(&self, history: &[WealthRecord]) -> f64 {
        let rates: Vec<f64> = self
            .savings_rate_series(history)
            .iter()
            .map(|p| p.savings_rate)
            .collect();
        mean(&rates)
    }

    fn salary_from_comment(comment: &str) -> f64 {
        if !comment.to_lowercase().contains(SALARY_KEYWORD) {
            return 0.0;
        }
        first_integer()
            .find(comment)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0)
    }

    // ── Aggregates over the full history ────────────────────────────

    /// Headline statistics: change vs. previous point, win rate, volatility,
    /// max drawdown and monthly rollups.
    pub fn wealth_summary(&self, timeline: &[MergedTimelinePoint]) -> WealthSummary {
        let Some(latest) = timeline.last() else {
            return WealthSummary::default();
        };
        let previous = if timeline.len() > 1 {
            &timeline[timeline.len() - 2]
        } else {
            latest
        };
        let count = timeline.len() as f64;

        let total_gain_loss: f64 = timeline.iter().map(|p| p.gain_loss).sum();
        let positive_periods = timeline.iter().filter(|p| p.gain_loss > 0.0).count();
        let change_net_worth = latest.net_worth - previous.net_worth;

        WealthSummary {
            latest: Some(latest.clone()),
            previous: Some(previous.clone()),
            total_gain_loss,
            avg_gain_loss: total_gain_loss / count,
            change_net_worth,
            change_pct: percent_change(previous.net_worth, latest.net_worth),
            positive_periods,
            win_rate: positive_periods as f64 / count * 100.0,
            volatility: self.volatility(timeline),
            max_drawdown: self.max_drawdown(timeline),
            monthly_performance: self.monthly_performance(timeline),
        }
    }

    /// Population standard deviation of period growth rates (first point excluded).
    pub fn volatility(&self, timeline: &[MergedTimelinePoint]) -> f64 {
        let returns: Vec<f64> = self
            .growth_series(timeline)
            .iter()
            .skip(1)
            .map(|g| g.growth)
            .collect();
        if returns.is_empty() {
            return 0.0;
        }
        let avg = mean(&returns);
        let variance = returns.iter().map(|r| (r - avg).powi(2)).sum::<f64>() / returns.len() as f64;
        variance.sqrt()
    }

    /// Largest decline from a running net-worth peak, in percent.
    pub fn max_drawdown(&self, timeline: &[MergedTimelinePoint]) -> f64 {
        let Some(first) = timeline.first() else {
            return 0.0;
        };
        let mut peak = first.net_worth;
        let mut max_drawdown: f64 = 0.0;

        for point in timeline {
            if point.net_worth > peak {
                peak = point.net_worth;
            }
            if peak > 0.0 {
                max_drawdown = max_drawdown.max((peak - point.net_worth) / peak * 100.0);
            }
        }
        max_drawdown
    }

    /// Average net worth and summed gain/loss per calendar month, oldest first.
    pub fn monthly_performance(&self, timeline: &[MergedTimelinePoint]) -> Vec<MonthlyPerformance> {
        let mut months: BTreeMap<(i32, u32), (Vec<f64>, f64)> = BTreeMap::new();
        for point in timeline {
            let entry = months
                .entry((point.date.year(), point.date.month()))
                .or_default();
            entry.0.push(point.net_worth);
            entry.1 += point.gain_loss;
        }

        months
            .into_iter()
            .map(|((year, month), (values, total_gain))| MonthlyPerformance {
                month: format!("{year}-{month:02}"),
                avg_value: mean(&values),
                total_gain,
            })
            .collect()
    }

    /// Heatmap cells: summed period returns per (year, month), oldest first.
    pub fn monthly_returns(&self, timeline: &[MergedTimelinePoint]) -> Vec<MonthlyReturn> {
        let mut cells: BTreeMap<(i32, u32), f64> = BTreeMap::new();
        for (point, change) in timeline.iter().zip(self.volatility_series(timeline)).skip(1) {
            *cells
                .entry((point.date.year(), point.date.month()))
                .or_insert(0.0) += change.change;
        }

        cells
            .into_iter()
            .map(|((year, month), return_pct)| MonthlyReturn {
                year,
                month,
                return_pct,
            })
            .collect()
    }

    /// Splits total growth into contributions and gain/loss. Needs at least two points.
    pub fn cash_flow_breakdown(&self, timeline: &[MergedTimelinePoint]) -> Option<CashFlowBreakdown> {
        if timeline.len() < 2 {
            return None;
        }
        let first = timeline.first()?;
        let last = timeline.last()?;

        let gain_loss: f64 = timeline.iter().map(|p| p.gain_loss).sum();
        let total_growth = last.net_worth - first.net_worth;

        Some(CashFlowBreakdown {
            start: first.net_worth,
            contributions: total_growth - gain_loss,
            gain_loss,
            end: last.net_worth,
        })
    }

    /// Average monthly earning so far and the time it implies to reach each target.
    ///
    /// Months elapsed counts calendar months between the first and last point,
    /// plus the day difference as a fraction of a 30-day month.
    pub fn goal_projection(
        &self,
        timeline: &[MergedTimelinePoint],
        targets: &[f64],
    ) -> Option<GoalProjection> {
        if timeline.len() < 2 {
            return None;
        }
        let first = timeline.first()?;
        let last = timeline.last()?;

        let months_elapsed = f64::from(last.date.year() - first.date.year()) * 12.0
            + (f64::from(last.date.month()) - f64::from(first.date.month()))
            + (f64::from(last.date.day()) - f64::from(first.date.day())) / 30.0;

        let current = last.net_worth;
        let average_monthly_earning = if months_elapsed > 0.0 {
            (current - first.net_worth) / months_elapsed
        } else {
            0.0
        };

        let goals = targets
            .iter()
            .map(|&target| {
                let progress_pct = if target > 0.0 {
                    (current / target * 100.0).min(100.0)
                } else {
                    100.0
                };
                let remaining = target - current;
                let months_to_goal = if remaining <= 0.0 {
                    Some(0)
                } else if average_monthly_earning > 0.0 {
                    Some((remaining / average_monthly_earning).ceil() as u32)
                } else {
                    None
                };
                GoalProgress {
                    target,
                    progress_pct,
                    months_to_goal,
                }
            })
            .collect();

        Some(GoalProjection {
            start_net_worth: first.net_worth,
            current_net_worth: current,
            months_elapsed,
            average_monthly_earning,
            goals,
        })
    }

    // ── Holdings & breakdowns ───────────────────────────────────────

    /// Portfolio totals and the amount to buy/sell per holding to hit its target.
    pub fn investment_summary(&self, holdings: &[InvestmentHolding]) -> Option<InvestmentSummary> {
        if holdings.is_empty() {
            return None;
        }

        let total_invested: f64 = holdings.iter().map(|h| h.invested_amount).sum();
        let total_current_value: f64 = holdings.iter().map(|h| h.current_value).sum();
        let total_profit = total_current_value - total_invested;
        let expense_ratios: Vec<f64> = holdings.iter().map(|h| h.expense_ratio_pct).collect();

        let rebalancing = holdings
            .iter()
            .map(|h| RebalanceEntry {
                ticker: h.ticker.clone(),
                current_allocation_pct: h.current_allocation_pct,
                target_allocation_pct: h.target_allocation_pct,
                rebalance_amount: h.target_allocation_pct / 100.0 * total_current_value
                    - h.current_value,
            })
            .collect();

        Some(InvestmentSummary {
            total_invested,
            total_current_value,
            total_profit,
            total_profit_pct: share_pct(total_profit, total_invested),
            avg_expense_ratio: mean(&expense_ratios),
            rebalancing,
        })
    }

    /// Total EUR equivalent of all cash sources and their slices, largest first.
    pub fn cash_split_summary(&self, cash: &[CashSourceRecord]) -> CashSplitSummary {
        let slices = cash
            .iter()
            .map(|c| Slice {
                name: c.source_name.clone(),
                value: c.total_eur_equivalent,
            })
            .collect();

        CashSplitSummary {
            total_eur: cash.iter().map(|c| c.total_eur_equivalent).sum(),
            slices: Self::sorted_desc(slices),
        }
    }

    /// Breakdown of the most recent asset snapshot, largest first.
    pub fn asset_slices(&self, assets: &[AssetSnapshot]) -> Vec<Slice> {
        let Some(latest) = assets.iter().max_by_key(|s| s.date) else {
            return Vec::new();
        };
        let slices = latest
            .values_by_asset_name
            .iter()
            .map(|a| Slice {
                name: a.name.clone(),
                value: a.value,
            })
            .collect();
        Self::sorted_desc(slices)
    }

    fn sorted_desc(mut slices: Vec<Slice>) -> Vec<Slice> {
        slices.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        slices
    }

    /// Heuristic diversification scores for the latest point.
    ///
    /// Asset types score closeness to an even cash/investments/assets split;
    /// allocation balance penalises drift from target allocations.
    pub fn diversification_score(
        &self,
        latest: &MergedTimelinePoint,
        holdings: &[InvestmentHolding],
    ) -> DiversificationScore {
        let total = latest.net_worth;
        let ratio = |part: f64| if total > 0.0 { part / total } else { 0.0 };
        let cash_ratio = ratio(latest.cash_value);

        let asset_types = if total > 0.0 {
            let closeness = |ideal: f64, actual: f64| (1.0 - (ideal - actual).abs()) * 100.0;
            ((closeness(0.33, cash_ratio)
                + closeness(0.33, ratio(latest.investments_value))
                + closeness(0.34, ratio(latest.assets_total)))
                / 3.0)
                .clamp(0.0, 100.0)
        } else {
            0.0
        };

        let currency = if latest.ron_amount > 0.0 && latest.eur_amount > 0.0 {
            80.0
        } else {
            40.0
        };

        let holdings_count = (holdings.len() as f64 * 25.0).min(100.0);

        let allocation_balance = if holdings.is_empty() {
            0.0
        } else {
            let drifts: Vec<f64> = holdings
                .iter()
                .map(|h| (h.current_allocation_pct - h.target_allocation_pct).abs())
                .collect();
            (100.0 - mean(&drifts) * 2.0).max(0.0)
        };

        let liquidity = if cash_ratio * 100.0 > 20.0 { 80.0 } else { 50.0 };

        let overall = mean(&[asset_types, currency, holdings_count, allocation_balance, liquidity]);

        DiversificationScore {
            asset_types,
            currency,
            holdings_count,
            allocation_balance,
            liquidity,
            overall,
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
