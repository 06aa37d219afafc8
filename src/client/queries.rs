//! GraphQL documents sent upstream

/// Full media record plus its recommendations, variables: `mediaId`.
pub const MEDIA_QUERY: &str = r#"query($mediaId: Int) {
  Media(id: $mediaId) {
    ...MediaFields
    recommendations {
      nodes {
        mediaRecommendation {
          ...MediaFields
        }
        id
        rating
      }
    }
  }
}

fragment MediaFields on Media {
  id
  idMal
  title {
    romaji
    english
    native
  }
  type
  format
  status
  description
  startDate {
    year
    month
    day
  }
  endDate {
    year
    month
    day
  }
  season
  seasonYear
  episodes
  duration
  chapters
  volumes
  countryOfOrigin
  isLicensed
  source
  trailer {
    id
    site
    thumbnail
  }
  updatedAt
  coverImage {
    extraLarge
    large
    medium
    color
  }
  bannerImage
  genres
  synonyms
  averageScore
  meanScore
  popularity
  favourites
  tags {
    id
    name
    description
    category
    rank
    isGeneralSpoiler
    isMediaSpoiler
    isAdult
    userId
  }
  studios {
    nodes {
      id
      name
      isAnimationStudio
    }
    pageInfo {
      total
      perPage
      currentPage
      lastPage
      hasNextPage
    }
  }
  isAdult
  externalLinks {
    id
    url
    site
    siteId
    type
    language
    color
    icon
    notes
    isDisabled
  }
  rankings {
    id
    rank
    type
    format
    year
    season
    allTime
    context
  }
  siteUrl
}
"#;

/// Status-grouped list entries of one media type, variables: `userName`, `type`.
pub const USER_QUERY: &str = r#"query($userName: String, $type: MediaType) {
  MediaListCollection(userName: $userName, type: $type) {
    lists {
      entries {
        mediaId
      }
      status
    }
  }
}
"#;

/// One page of title search results, variables: `search`, `page`, `perPage`, `type`.
pub const SEARCH_QUERY: &str = r#"query($search: String, $page: Int, $perPage: Int, $type: MediaType) {
  Page(page: $page, perPage: $perPage) {
    pageInfo {
      total
      currentPage
      lastPage
      hasNextPage
      perPage
    }
    media(search: $search, type: $type) {
      id
      title {
        romaji
        english
        native
      }
      coverImage {
        medium
        large
      }
      type
      format
      status
      averageScore
      startDate {
        year
        month
        day
      }
    }
  }
}
"#;

/// Results requested per search page
pub const SEARCH_PER_PAGE: u32 = 20;
