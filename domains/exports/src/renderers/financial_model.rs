//! Financial model: revenue and cost tables with recomputed totals, and the
//! dilution arithmetic for the planned raise
//!
//! Totals are always summed from the line items here; any precomputed
//! totals the form stored in the payload are ignored.

use serde_json::Value;

use crate::blocks::{Block, BlockBuilder, TableBlock};
use crate::format::{format_currency, format_percent, or_placeholder, PLACEHOLDER};
use crate::payload::{
    column_total, from_value, FinancialModelPayload, LineItem, ValueProposition,
    FINANCIAL_BUCKETS,
};

pub fn render(data: &Value, _vp: Option<&ValueProposition>) -> Vec<Block> {
    let model: FinancialModelPayload = from_value(data);

    let builder = BlockBuilder::new().subheading("Revenue Streams");
    let builder = line_item_section(builder, "Revenue stream", &model.revenue_streams);

    let builder = builder.subheading("Costs");
    let builder = line_item_section(builder, "Cost", &model.costs);

    let builder = if model.revenue_streams.is_empty() && model.costs.is_empty() {
        builder
    } else {
        builder
            .subheading("Net Position")
            .table(net_position(&model))
    };

    let funding = Funding::from_model(&model);
    let investment = format_currency(model.investment_amount);
    let pre_money = format_currency(model.pre_money_valuation);
    let post_money = format_currency(funding.post_money);
    let stake = percent_or_placeholder(funding.investor_stake);
    let retention = percent_or_placeholder(funding.founder_retention);

    builder
        .subheading("Funding")
        .inline("Investment sought", Some(investment.as_str()))
        .inline("Pre-money valuation", Some(pre_money.as_str()))
        .inline("Post-money valuation", Some(post_money.as_str()))
        .inline("Investor stake", Some(stake.as_str()))
        .inline("Founder retention", Some(retention.as_str()))
        .inline("Break-even month", model.break_even_month.as_deref())
        .field("Key assumptions", model.assumptions.as_deref())
        .build()
}

fn line_item_section(
    builder: BlockBuilder,
    first_column: &str,
    items: &[LineItem],
) -> BlockBuilder {
    if items.is_empty() {
        return builder.placeholder();
    }
    builder.table(line_item_table(first_column, items))
}

/// Bold header, one row per item, then the recomputed total row
pub fn line_item_table(first_column: &str, items: &[LineItem]) -> TableBlock {
    let header = std::iter::once(first_column)
        .chain(FINANCIAL_BUCKETS.iter().map(|(_, label)| *label));

    let table = items.iter().fold(TableBlock::new(header), |table, item| {
        let mut cells = vec![or_placeholder(item.name.as_deref()).to_string()];
        cells.extend(
            FINANCIAL_BUCKETS
                .iter()
                .map(|(bucket, _)| format_currency(item.amount(bucket))),
        );
        table.row(cells)
    });

    let mut total = vec!["Total".to_string()];
    total.extend(
        FINANCIAL_BUCKETS
            .iter()
            .map(|(bucket, _)| format_currency(Some(column_total(items, bucket)))),
    );
    table.total(total)
}

fn net_position(model: &FinancialModelPayload) -> TableBlock {
    let header = std::iter::once("").chain(FINANCIAL_BUCKETS.iter().map(|(_, label)| *label));

    let revenue: Vec<f64> = FINANCIAL_BUCKETS
        .iter()
        .map(|(bucket, _)| column_total(&model.revenue_streams, bucket))
        .collect();
    let costs: Vec<f64> = FINANCIAL_BUCKETS
        .iter()
        .map(|(bucket, _)| column_total(&model.costs, bucket))
        .collect();

    let row = |label: &str, values: &[f64]| {
        std::iter::once(label.to_string())
            .chain(values.iter().map(|v| format_currency(Some(*v))))
            .collect::<Vec<_>>()
    };
    let net: Vec<f64> = revenue.iter().zip(&costs).map(|(r, c)| r - c).collect();

    TableBlock::new(header)
        .row(row("Revenue", &revenue))
        .row(row("Costs", &costs))
        .total(row("Net", &net))
}

/// Post-money valuation and ownership split after the raise
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Funding {
    pub post_money: Option<f64>,
    /// Percent of the company sold, 0–100
    pub investor_stake: Option<f64>,
    /// Percent the founders keep, 0–100
    pub founder_retention: Option<f64>,
}

impl Funding {
    pub fn from_model(model: &FinancialModelPayload) -> Self {
        match (model.investment_amount, model.pre_money_valuation) {
            (Some(investment), Some(pre_money)) if investment > 0.0 && pre_money > 0.0 => {
                let post_money = pre_money + investment;
                let stake = investment * 100.0 / post_money;
                Self {
                    post_money: Some(post_money),
                    investor_stake: Some(stake),
                    founder_retention: Some(100.0 - stake),
                }
            }
            _ => Self::default(),
        }
    }
}

fn percent_or_placeholder(value: Option<f64>) -> String {
    value
        .map(format_percent)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tables(blocks: &[Block]) -> Vec<&TableBlock> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::Table(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_month_12_total() {
        let blocks = render(
            &json!({"revenue_streams": [
                {"name": "SaaS", "month12": "10000"},
                {"name": "Services", "month12": "5000"},
            ]}),
            None,
        );
        let revenue = tables(&blocks)[0];
        assert_eq!(
            revenue.header,
            vec!["Revenue stream", "Month 1", "Month 3", "Month 6", "Month 12"]
        );
        assert_eq!(revenue.rows.len(), 2);
        assert_eq!(revenue.rows[0], vec!["SaaS", "—", "—", "—", "R 10 000"]);
        let total = revenue.total.as_ref().unwrap();
        assert_eq!(total[0], "Total");
        assert_eq!(total[4], "R 15 000");
        assert_eq!(total[1], "R 0");
    }

    #[test]
    fn test_total_matches_sum_with_non_numeric_as_zero() {
        let streams = json!([
            {"name": "A", "month1": "1 200", "month3": 300, "month6": "x"},
            {"name": "B", "month1": 800.4, "month3": "", "month6": 50},
            {"name": "C", "month1": null, "month3": "R 700", "month6": {"bad": 1}},
        ]);
        let model: FinancialModelPayload = from_value(&json!({"revenue_streams": streams}));
        let table = line_item_table("Revenue stream", &model.revenue_streams);
        let total = table.total.unwrap();
        assert_eq!(total[1], format_currency(Some(1200.0 + 800.4)));
        assert_eq!(total[2], "R 1 000");
        assert_eq!(total[3], "R 50");
        assert_eq!(total[4], "R 0");
    }

    #[test]
    fn test_precomputed_totals_ignored() {
        let blocks = render(
            &json!({
                "revenue_streams": [{"name": "SaaS", "month12": 100}],
                "totals": {"month12": 999999},
                "total_month12": "999999",
            }),
            None,
        );
        let total = tables(&blocks)[0].total.clone().unwrap();
        assert_eq!(total[4], "R 100");
    }

    #[test]
    fn test_net_position() {
        let blocks = render(
            &json!({
                "revenue_streams": [{"name": "SaaS", "month1": 5000}],
                "costs": [{"name": "Rent", "month1": "7 500"}],
            }),
            None,
        );
        let all = tables(&blocks);
        assert_eq!(all.len(), 3);
        let net = all[2].total.as_ref().unwrap();
        assert_eq!(net[0], "Net");
        assert_eq!(net[1], "-R 2 500");
    }

    #[test]
    fn test_dilution() {
        let model: FinancialModelPayload = from_value(&json!({
            "investment_amount": "2,000,000",
            "pre_money_valuation": 8_000_000,
        }));
        let funding = Funding::from_model(&model);
        assert_eq!(funding.post_money, Some(10_000_000.0));
        assert_eq!(funding.investor_stake, Some(20.0));
        assert_eq!(funding.founder_retention, Some(80.0));

        let blocks = render(
            &json!({"investment_amount": 2_000_000, "pre_money_valuation": 8_000_000}),
            None,
        );
        let texts: Vec<_> = blocks.iter().filter_map(Block::text).collect();
        assert!(texts.contains(&"Post-money valuation: R 10 000 000"));
        assert!(texts.contains(&"Investor stake: 20.0%"));
        assert!(texts.contains(&"Founder retention: 80.0%"));
    }

    #[test]
    fn test_dilution_needs_both_positive_figures() {
        for data in [
            json!({"investment_amount": 1000}),
            json!({"investment_amount": 0, "pre_money_valuation": 1000}),
            json!({"investment_amount": "lots", "pre_money_valuation": 1000}),
        ] {
            let model: FinancialModelPayload = from_value(&data);
            assert_eq!(Funding::from_model(&model), Funding::default());
        }
    }

    #[test]
    fn test_empty_payload() {
        let blocks = render(&json!({}), None);
        assert!(tables(&blocks).is_empty());
        let texts: Vec<_> = blocks.iter().filter_map(Block::text).collect();
        assert!(texts.contains(&"Investment sought: —"));
        assert!(texts.contains(&"Founder retention: —"));
        assert!(!texts.contains(&"Net Position"));
    }
}
