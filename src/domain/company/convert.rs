//! Conversion: CompanyResponse → Company (TryFrom + validation).

use super::wire;
use super::{ChartPoint, Company, ValidationError};

impl From<wire::ChartPointResponse> for ChartPoint {
    fn from(p: wire::ChartPointResponse) -> Self {
        Self {
            date: p.date,
            price: p.price,
            volume: p.volume,
        }
    }
}

impl TryFrom<wire::CompanyResponse> for Company {
    type Error = ValidationError;

    fn try_from(source: wire::CompanyResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();
        let raw_id = source.id.clone().unwrap_or_default();

        let id = source.id.unwrap_or_else(|| {
            errors.push(ValidationError::MissingId);
            String::new()
        });
        let symbol = source.symbol.unwrap_or_else(|| {
            errors.push(ValidationError::MissingSymbol);
            String::new()
        });
        let name = source.name.unwrap_or_else(|| {
            errors.push(ValidationError::MissingName);
            String::new()
        });

        if source.current_price < 0.0 || source.starting_price < 0.0 {
            errors.push(ValidationError::NegativePrice);
        }

        let chart_data: Vec<ChartPoint> =
            source.chart_data.into_iter().map(Into::into).collect();
        if !is_date_ordered(&chart_data) {
            errors.push(ValidationError::UnorderedSeries);
        }

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(raw_id, errors));
        }

        Ok(Company {
            id: id.into(),
            symbol,
            name,
            category: source.category.unwrap_or_default(),
            description: source.description.unwrap_or_default(),
            logo: source.logo.unwrap_or_default(),
            current_price: source.current_price,
            starting_price: source.starting_price,
            market_cap: source.market_cap,
            daily_increase_rate: source.daily_increase_rate,
            total_supply: source.total_supply,
            circulating_supply: source.circulating_supply,
            chart_data,
        })
    }
}

/// Empty series are valid; otherwise dates must be non-decreasing.
fn is_date_ordered(points: &[ChartPoint]) -> bool {
    points.windows(2).all(|w| w[0].date <= w[1].date)
}
