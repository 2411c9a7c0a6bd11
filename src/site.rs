// Server-rendered pages.
use crate::db::{cities, neighborhoods, properties, reviews};
use crate::errors::ServerError;
use crate::request::{parse_id, QueryParams};
use crate::responses::{html_response, ResultResp};
use crate::search::{Pagination, SearchRequest};
use crate::state::AppState;
use crate::templates::pages::{self, CityVm, HomeVm, PropertyVm, SearchVm};

const HOME_FEATURED_PROPERTIES: i64 = 8;
const HOME_FEATURED_CITIES: i64 = 4;
const CITY_PAGE_PROPERTIES: i64 = 24;

pub fn home(state: &AppState) -> ResultResp {
    let vm = state.db.with_conn(|conn| {
        Ok(HomeVm {
            featured_properties: properties::featured(conn, HOME_FEATURED_PROPERTIES)?,
            featured_cities: cities::featured(conn, HOME_FEATURED_CITIES)?,
        })
    })?;
    html_response(pages::home_page(&vm))
}

/// Filters, search-bar state and page all come from the query string.
pub fn search(query: &QueryParams, state: &AppState) -> ResultResp {
    let request = SearchRequest::from_query(query);
    let filter = request.to_sql();
    let pagination = Pagination::from_query(query);

    let (window, results) = state.db.with_conn(|conn| {
        let total = properties::count(conn, &filter)?;
        let window = pagination.window(usize::try_from(total).unwrap_or(0));
        let results = properties::search(conn, &filter, Some((window.limit(), window.offset())))?;
        Ok((window, results))
    })?;

    let vm = SearchVm {
        request,
        params: query.clone(),
        window,
        results,
    };
    html_response(pages::search_page(&vm))
}

pub fn property(raw_id: &str, state: &AppState) -> ResultResp {
    let id = parse_id(raw_id, "property")?;
    let (property, reviews) = state.db.with_conn(|conn| {
        let property = properties::get(conn, id)?
            .filter(|p| p.is_active)
            .ok_or_else(|| ServerError::not_found("Property"))?;
        let reviews = reviews::list_for_property(conn, id)?;
        Ok((property, reviews))
    })?;

    let review_widget_code = property
        .review_widget_code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| state.revyoos_widget_code.clone());

    html_response(pages::property_page(&PropertyVm {
        property,
        reviews,
        review_widget_code,
    }))
}

pub fn city(name: &str, state: &AppState) -> ResultResp {
    let vm = state.db.with_conn(|conn| {
        let city = cities::get_by_name(conn, name)?.ok_or_else(|| ServerError::not_found("City"))?;
        let neighborhoods = neighborhoods::list_for_city(conn, city.id)?;
        let properties = properties::by_city(conn, &city.name, CITY_PAGE_PROPERTIES, 0)?;
        Ok(CityVm {
            city,
            neighborhoods,
            properties,
        })
    })?;
    html_response(pages::city_page(&vm))
}

pub fn hospitable_search(state: &AppState) -> ResultResp {
    html_response(pages::hospitable_search_page(
        state.hospitable_search_identifier.as_deref(),
    ))
}
