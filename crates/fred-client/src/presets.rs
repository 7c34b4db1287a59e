//! Named presets for well-known FRED series
//!
//! One data row per indicator rather than one type per indicator;
//! [`crate::FredClient::preset`] instantiates the generic
//! [`crate::SeriesClient`] from the row.

use std::fmt;

/// Well-known FRED series, keyed by indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesPreset {
  /// Consumer Price Index for All Urban Consumers (`CPIAUCSL`)
  ConsumerPriceIndex,

  /// PCE price index (`PCEPI`)
  PcePriceIndex,

  /// Civilian unemployment rate (`UNRATE`)
  UnemploymentRate,

  /// Labor force participation rate (`CIVPART`)
  LaborForceParticipation,

  /// Gross Domestic Product (`GDP`)
  GrossDomesticProduct,

  /// Total public debt (`GFDEBTN`)
  FederalDebt,

  /// Federal debt as percent of GDP (`GFDEGDQ188S`)
  DebtToGdpRatio,

  /// Effective federal funds rate (`FEDFUNDS`)
  FederalFundsRate,

  /// 10-year minus 2-year Treasury constant maturity spread (`T10Y2Y`)
  TreasurySpread10y2y,

  /// 10-year minus 3-month Treasury constant maturity spread (`T10Y3M`)
  TreasurySpread10y3m,

  /// 30-year fixed rate mortgage average (`MORTGAGE30US`)
  MortgageRate30y,

  /// Nominal broad U.S. dollar index (`DTWEXBGS`)
  DollarIndex,

  /// Federal Reserve total assets (`WALCL`)
  FedTotalAssets,

  /// M2 money stock (`M2SL`)
  M2MoneyStock,

  /// Overnight reverse repurchase agreements (`RRPONTSYD`)
  OvernightReverseRepos,
}

impl SeriesPreset {
  /// Every preset, for iteration
  pub const ALL: [SeriesPreset; 15] = [
    SeriesPreset::ConsumerPriceIndex,
    SeriesPreset::PcePriceIndex,
    SeriesPreset::UnemploymentRate,
    SeriesPreset::LaborForceParticipation,
    SeriesPreset::GrossDomesticProduct,
    SeriesPreset::FederalDebt,
    SeriesPreset::DebtToGdpRatio,
    SeriesPreset::FederalFundsRate,
    SeriesPreset::TreasurySpread10y2y,
    SeriesPreset::TreasurySpread10y3m,
    SeriesPreset::MortgageRate30y,
    SeriesPreset::DollarIndex,
    SeriesPreset::FedTotalAssets,
    SeriesPreset::M2MoneyStock,
    SeriesPreset::OvernightReverseRepos,
  ];

  /// The FRED series identifier for this preset
  pub const fn series_id(&self) -> &'static str {
    match self {
      SeriesPreset::ConsumerPriceIndex => "CPIAUCSL",
      SeriesPreset::PcePriceIndex => "PCEPI",
      SeriesPreset::UnemploymentRate => "UNRATE",
      SeriesPreset::LaborForceParticipation => "CIVPART",
      SeriesPreset::GrossDomesticProduct => "GDP",
      SeriesPreset::FederalDebt => "GFDEBTN",
      SeriesPreset::DebtToGdpRatio => "GFDEGDQ188S",
      SeriesPreset::FederalFundsRate => "FEDFUNDS",
      SeriesPreset::TreasurySpread10y2y => "T10Y2Y",
      SeriesPreset::TreasurySpread10y3m => "T10Y3M",
      SeriesPreset::MortgageRate30y => "MORTGAGE30US",
      SeriesPreset::DollarIndex => "DTWEXBGS",
      SeriesPreset::FedTotalAssets => "WALCL",
      SeriesPreset::M2MoneyStock => "M2SL",
      SeriesPreset::OvernightReverseRepos => "RRPONTSYD",
    }
  }
}

impl fmt::Display for SeriesPreset {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.series_id())
  }
}
