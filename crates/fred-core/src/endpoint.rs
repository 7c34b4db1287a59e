//! The FRED endpoint catalogue and its parameter schema
//!
//! Every endpoint the API exposes is a variant here, together with the
//! set of query parameters it accepts. The catalogue is static data:
//! request descriptors validate their parameters against it at
//! construction time, so an invalid request is never built.

use std::fmt;

use crate::error::{Error, Result};

/// The FRED API endpoints currently supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  // Category family
  Category,
  CategoryChildren,
  CategoryRelated,
  CategorySeries,
  CategoryTags,
  CategoryRelatedTags,

  // Release family
  Releases,
  ReleasesDates,
  Release,
  ReleaseDates,
  ReleaseSeries,
  ReleaseSources,
  ReleaseTags,
  ReleaseRelatedTags,
  ReleaseTables,

  // Series family
  Series,
  SeriesCategories,
  SeriesObservations,
  SeriesRelease,
  SeriesSearch,
  SeriesSearchTags,
  SeriesSearchRelatedTags,
  SeriesTags,
  SeriesUpdates,
  SeriesVintageDates,

  // Source family
  Sources,
  Source,
  SourceReleases,

  // Tag family
  Tags,
  RelatedTags,
  TagsSeries,
}

impl Endpoint {
  /// Every catalogued endpoint, for iteration.
  pub const ALL: [Endpoint; 31] = [
    Endpoint::Category,
    Endpoint::CategoryChildren,
    Endpoint::CategoryRelated,
    Endpoint::CategorySeries,
    Endpoint::CategoryTags,
    Endpoint::CategoryRelatedTags,
    Endpoint::Releases,
    Endpoint::ReleasesDates,
    Endpoint::Release,
    Endpoint::ReleaseDates,
    Endpoint::ReleaseSeries,
    Endpoint::ReleaseSources,
    Endpoint::ReleaseTags,
    Endpoint::ReleaseRelatedTags,
    Endpoint::ReleaseTables,
    Endpoint::Series,
    Endpoint::SeriesCategories,
    Endpoint::SeriesObservations,
    Endpoint::SeriesRelease,
    Endpoint::SeriesSearch,
    Endpoint::SeriesSearchTags,
    Endpoint::SeriesSearchRelatedTags,
    Endpoint::SeriesTags,
    Endpoint::SeriesUpdates,
    Endpoint::SeriesVintageDates,
    Endpoint::Sources,
    Endpoint::Source,
    Endpoint::SourceReleases,
    Endpoint::Tags,
    Endpoint::RelatedTags,
    Endpoint::TagsSeries,
  ];

  /// The URL path segment for this endpoint.
  pub const fn as_path(&self) -> &'static str {
    match self {
      Endpoint::Category => "category",
      Endpoint::CategoryChildren => "category/children",
      Endpoint::CategoryRelated => "category/related",
      Endpoint::CategorySeries => "category/series",
      Endpoint::CategoryTags => "category/tags",
      Endpoint::CategoryRelatedTags => "category/related_tags",
      Endpoint::Releases => "releases",
      Endpoint::ReleasesDates => "releases/dates",
      Endpoint::Release => "release",
      Endpoint::ReleaseDates => "release/dates",
      Endpoint::ReleaseSeries => "release/series",
      Endpoint::ReleaseSources => "release/sources",
      Endpoint::ReleaseTags => "release/tags",
      Endpoint::ReleaseRelatedTags => "release/related_tags",
      Endpoint::ReleaseTables => "release/tables",
      Endpoint::Series => "series",
      Endpoint::SeriesCategories => "series/categories",
      Endpoint::SeriesObservations => "series/observations",
      Endpoint::SeriesRelease => "series/release",
      Endpoint::SeriesSearch => "series/search",
      Endpoint::SeriesSearchTags => "series/search/tags",
      Endpoint::SeriesSearchRelatedTags => "series/search/related_tags",
      Endpoint::SeriesTags => "series/tags",
      Endpoint::SeriesUpdates => "series/updates",
      Endpoint::SeriesVintageDates => "series/vintagedates",
      Endpoint::Sources => "sources",
      Endpoint::Source => "source",
      Endpoint::SourceReleases => "source/releases",
      Endpoint::Tags => "tags",
      Endpoint::RelatedTags => "related_tags",
      Endpoint::TagsSeries => "tags/series",
    }
  }

  /// Look an endpoint up by its URL path segment.
  pub fn from_path(path: &str) -> Result<Self> {
    Self::ALL
      .iter()
      .find(|endpoint| endpoint.as_path() == path)
      .copied()
      .ok_or_else(|| Error::UnknownEndpoint(path.to_string()))
  }

  /// Whether `path` names a catalogued endpoint.
  pub fn is_valid_path(path: &str) -> bool {
    Self::from_path(path).is_ok()
  }

  /// The query parameters this endpoint accepts.
  pub const fn allowed_params(&self) -> &'static [&'static str] {
    match self {
      Endpoint::Category => &["category_id"],
      Endpoint::CategoryChildren => &["category_id", "realtime_start", "realtime_end"],
      Endpoint::CategoryRelated => &["category_id", "realtime_start", "realtime_end"],
      Endpoint::CategorySeries => &[
        "category_id",
        "realtime_start",
        "realtime_end",
        "limit",
        "offset",
        "order_by",
        "sort_order",
        "filter_variable",
        "filter_value",
        "tag_names",
        "exclude_tag_names",
      ],
      Endpoint::CategoryTags => &[
        "category_id",
        "realtime_start",
        "realtime_end",
        "tag_names",
        "tag_group_id",
        "search_text",
        "limit",
        "offset",
        "order_by",
        "sort_order",
      ],
      Endpoint::CategoryRelatedTags => &[
        "category_id",
        "realtime_start",
        "realtime_end",
        "tag_names",
        "exclude_tag_names",
        "tag_group_id",
        "search_text",
        "limit",
        "offset",
        "order_by",
        "sort_order",
      ],
      Endpoint::Releases => {
        &["realtime_start", "realtime_end", "limit", "offset", "order_by", "sort_order"]
      }
      Endpoint::ReleasesDates => &[
        "realtime_start",
        "realtime_end",
        "limit",
        "offset",
        "order_by",
        "sort_order",
        "include_release_dates_with_no_data",
      ],
      Endpoint::Release => &["release_id", "realtime_start", "realtime_end"],
      Endpoint::ReleaseDates => &[
        "release_id",
        "realtime_start",
        "realtime_end",
        "limit",
        "offset",
        "sort_order",
        "include_release_dates_with_no_data",
      ],
      Endpoint::ReleaseSeries => &[
        "release_id",
        "realtime_start",
        "realtime_end",
        "limit",
        "offset",
        "order_by",
        "sort_order",
        "filter_variable",
        "filter_value",
        "tag_names",
        "exclude_tag_names",
      ],
      Endpoint::ReleaseSources => &["release_id", "realtime_start", "realtime_end"],
      Endpoint::ReleaseTags => &[
        "release_id",
        "realtime_start",
        "realtime_end",
        "tag_names",
        "tag_group_id",
        "search_text",
        "limit",
        "offset",
        "order_by",
        "sort_order",
      ],
      Endpoint::ReleaseRelatedTags => &[
        "release_id",
        "realtime_start",
        "realtime_end",
        "tag_names",
        "exclude_tag_names",
        "tag_group_id",
        "search_text",
        "limit",
        "offset",
        "order_by",
        "sort_order",
      ],
      Endpoint::ReleaseTables => {
        &["release_id", "element_id", "include_observation_values", "observation_date"]
      }
      Endpoint::Series => &["series_id", "realtime_start", "realtime_end"],
      Endpoint::SeriesCategories => &["series_id", "realtime_start", "realtime_end"],
      Endpoint::SeriesObservations => &[
        "series_id",
        "realtime_start",
        "realtime_end",
        "limit",
        "offset",
        "sort_order",
        "observation_start",
        "observation_end",
        "units",
        "frequency",
        "aggregation_method",
        "output_type",
        "vintage_dates",
      ],
      Endpoint::SeriesRelease => &["series_id", "realtime_start", "realtime_end"],
      Endpoint::SeriesSearch => &[
        "search_text",
        "search_type",
        "realtime_start",
        "realtime_end",
        "limit",
        "offset",
        "order_by",
        "sort_order",
        "filter_variable",
        "filter_value",
        "tag_names",
        "exclude_tag_names",
      ],
      Endpoint::SeriesSearchTags => &[
        "series_search_text",
        "realtime_start",
        "realtime_end",
        "tag_names",
        "tag_group_id",
        "tag_search_text",
        "limit",
        "offset",
        "order_by",
        "sort_order",
      ],
      Endpoint::SeriesSearchRelatedTags => &[
        "series_search_text",
        "realtime_start",
        "realtime_end",
        "tag_names",
        "exclude_tag_names",
        "tag_group_id",
        "tag_search_text",
        "limit",
        "offset",
        "order_by",
        "sort_order",
      ],
      Endpoint::SeriesTags => {
        &["series_id", "realtime_start", "realtime_end", "order_by", "sort_order"]
      }
      Endpoint::SeriesUpdates => &[
        "realtime_start",
        "realtime_end",
        "limit",
        "offset",
        "filter_value",
        "start_time",
        "end_time",
      ],
      Endpoint::SeriesVintageDates => {
        &["series_id", "realtime_start", "realtime_end", "limit", "offset", "sort_order"]
      }
      Endpoint::Sources => {
        &["realtime_start", "realtime_end", "limit", "offset", "order_by", "sort_order"]
      }
      Endpoint::Source => &["source_id", "realtime_start", "realtime_end"],
      Endpoint::SourceReleases => &[
        "source_id",
        "realtime_start",
        "realtime_end",
        "limit",
        "offset",
        "order_by",
        "sort_order",
      ],
      Endpoint::Tags => &[
        "realtime_start",
        "realtime_end",
        "tag_names",
        "tag_group_id",
        "search_text",
        "limit",
        "offset",
        "order_by",
        "sort_order",
      ],
      Endpoint::RelatedTags => &[
        "realtime_start",
        "realtime_end",
        "tag_names",
        "exclude_tag_names",
        "tag_group_id",
        "search_text",
        "limit",
        "offset",
        "order_by",
        "sort_order",
      ],
      Endpoint::TagsSeries => &[
        "tag_names",
        "exclude_tag_names",
        "realtime_start",
        "realtime_end",
        "limit",
        "offset",
        "order_by",
        "sort_order",
      ],
    }
  }

  /// Whether `name` is a legal query parameter for this endpoint.
  pub fn permits(&self, name: &str) -> bool {
    self.allowed_params().contains(&name)
  }
}

impl fmt::Display for Endpoint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_path())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_path_round_trip() {
    for endpoint in Endpoint::ALL {
      assert_eq!(Endpoint::from_path(endpoint.as_path()).unwrap(), endpoint);
    }
  }

  #[test]
  fn test_unknown_endpoint() {
    let err = Endpoint::from_path("series/nonsense").unwrap_err();
    assert!(matches!(err, Error::UnknownEndpoint(ref path) if path == "series/nonsense"));
    assert!(!Endpoint::is_valid_path("series/nonsense"));
  }

  #[test]
  fn test_category_params() {
    assert_eq!(Endpoint::Category.allowed_params(), &["category_id"]);
    assert!(Endpoint::Category.permits("category_id"));
    assert!(!Endpoint::Category.permits("series_id"));
  }

  #[test]
  fn test_observations_params() {
    let params = Endpoint::SeriesObservations.allowed_params();
    assert_eq!(params.len(), 13);
    for name in ["series_id", "observation_start", "observation_end", "units", "frequency"] {
      assert!(Endpoint::SeriesObservations.permits(name), "missing {name}");
    }
  }

  #[test]
  fn test_display_matches_path() {
    assert_eq!(Endpoint::SeriesObservations.to_string(), "series/observations");
    assert_eq!(Endpoint::TagsSeries.to_string(), "tags/series");
  }
}
