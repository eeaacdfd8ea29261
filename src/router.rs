use crate::app::App;
use crate::domain::booking::PriceBreakdown;
use crate::domain::loading::{load_logged, LoadingFlag};
use crate::domain::{filter, Carousel, CarouselAction, FilterCriteria, Listing, Wishlist};
use crate::errors::{ResultResp, ServerError};
use crate::paths::{decode_segment, safe_back_path};
use crate::responses::{
    html_response, html_status_response, html_with_cookie, see_other, text_response,
};
use crate::templates::components::{property_card, CardVm, HeaderVm};
use crate::templates::pages;
use astra::Request;
use std::io::Read;
use url::form_urlencoded;

type Params = Vec<(String, String)>;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let params = parse_query(&req);

    // Per-request UI state, owned here and handed down read-only.
    let wishlist = Wishlist::from_cookie_header(header(&req, "cookie"));

    tracing::debug!("{method} {path}");

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => home(app, &wishlist),
        ("GET", ["search"]) => search(app, &wishlist, &params),
        ("GET", ["property", id]) => property(app, &wishlist, &decode_segment(id), &params),
        ("GET", ["cards", id]) => card_fragment(app, &wishlist, &decode_segment(id), &params),
        ("GET", ["wishlist"]) => wishlist_page(app, &wishlist),
        ("POST", ["wishlist", id, "toggle"]) => {
            let id = decode_segment(id);
            let form = read_form(&mut req)?;
            toggle_wishlist(app, wishlist, &id, &form, &req)
        }
        ("GET", ["health"]) => text_response("ok"),
        _ => Err(ServerError::NotFound),
    }
}

fn home(app: &App, wishlist: &Wishlist) -> ResultResp {
    let auth = app.auth.snapshot();
    if auth.is_loading {
        return html_response(pages::loading_page());
    }

    let cards = cards_for(app.store.all().iter(), wishlist);
    html_response(pages::home_page(&header_vm(app, wishlist, ""), &cards))
}

fn search(app: &App, wishlist: &Wishlist, params: &Params) -> ResultResp {
    // `q` wins when non-empty, then `location`; absence is an empty string.
    let query = param(params, "q")
        .filter(|q| !q.is_empty())
        .or_else(|| param(params, "location"))
        .unwrap_or_default()
        .to_string();

    let criteria = FilterCriteria::from_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let show_filters = param(params, "filters") == Some("1");

    let flag = LoadingFlag::default();
    let results: &[Listing] = load_logged(&flag, "search results", || {
        Ok::<_, ServerError>(app.store.all())
    })
    .unwrap_or_default();

    let matched = filter(results, &criteria);
    tracing::debug!(
        "search q={query:?} matched {} of {}",
        matched.len(),
        results.len()
    );

    let vm = pages::SearchVm {
        cards: cards_for(matched.into_iter(), wishlist),
        query,
        criteria,
        show_filters,
        loading: flag.is_loading(),
        today: chrono::Local::now().date_naive(),
    };

    html_response(pages::search_page(&header_vm(app, wishlist, &vm.query), &vm))
}

fn property(app: &App, wishlist: &Wishlist, id: &str, params: &Params) -> ResultResp {
    let header = header_vm(app, wishlist, "");

    let flag = LoadingFlag::default();
    let found = load_logged(&flag, "property", || Ok::<_, ServerError>(app.store.get(id))).flatten();

    let Some(listing) = found else {
        tracing::info!("property {id:?} not found");
        return html_status_response(404, pages::property_not_found_page(&header));
    };

    let vm = pages::PropertyVm {
        listing,
        carousel: stepped_carousel(listing, params)?,
        is_wishlisted: wishlist.contains(&listing.id),
        breakdown: PriceBreakdown::new(listing.price, app.nights),
    };

    html_response(pages::property_page(&header, &vm))
}

/// htmx fragment: one card with its carousel stepped by `nav`.
fn card_fragment(app: &App, wishlist: &Wishlist, id: &str, params: &Params) -> ResultResp {
    let listing = app.store.get(id).ok_or(ServerError::NotFound)?;
    let vm = CardVm {
        listing,
        carousel: stepped_carousel(listing, params)?,
        is_wishlisted: wishlist.contains(&listing.id),
        inline_toggle: param(params, "inline") != Some("0"),
    };
    html_response(property_card(&vm))
}

fn wishlist_page(app: &App, wishlist: &Wishlist) -> ResultResp {
    // Plain posts here: removing a card must refresh the list and the count.
    let cards = cards_for(app.store.wishlisted(wishlist), wishlist)
        .into_iter()
        .map(CardVm::without_inline_toggle)
        .collect::<Vec<_>>();
    html_response(pages::wishlist_page(&header_vm(app, wishlist, ""), &cards))
}

fn toggle_wishlist(
    app: &App,
    wishlist: Wishlist,
    id: &str,
    form: &Params,
    req: &Request,
) -> ResultResp {
    let listing = app.store.get(id).ok_or(ServerError::NotFound)?;

    let wishlist = wishlist.toggle(&listing.id);
    let cookie = wishlist.set_cookie_header();
    tracing::debug!(
        "wishlist toggle {id:?}: now {} (size {})",
        if wishlist.contains(id) { "saved" } else { "removed" },
        wishlist.len()
    );

    if header(req, "hx-request") == Some("true") {
        // Re-render only the owning card, keeping its image.
        let vm = CardVm {
            listing,
            carousel: stepped_carousel(listing, form)?,
            is_wishlisted: wishlist.contains(&listing.id),
            inline_toggle: true,
        };
        return html_with_cookie(property_card(&vm), &cookie);
    }

    see_other(safe_back_path(header(req, "referer")), Some(&cookie))
}

/// Carousel at `image`, then stepped once by `nav` when present.
fn stepped_carousel(listing: &Listing, params: &Params) -> Result<Carousel, ServerError> {
    let image = param(params, "image")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);

    let carousel = Carousel::at(listing.image_count(), image).ok_or_else(|| {
        tracing::error!("listing {:?} has no images", listing.id);
        ServerError::InternalError
    })?;

    Ok(match param(params, "nav").and_then(CarouselAction::from_param) {
        Some(action) => carousel.apply(action),
        None => carousel,
    })
}

fn cards_for<'a>(
    listings: impl Iterator<Item = &'a Listing>,
    wishlist: &Wishlist,
) -> Vec<CardVm<'a>> {
    listings
        .filter_map(|l| CardVm::new(l, wishlist.contains(&l.id)))
        .collect()
}

fn header_vm(app: &App, wishlist: &Wishlist, query: &str) -> HeaderVm {
    let auth = app.auth.snapshot();
    HeaderVm {
        user_name: auth.user.map(|u| u.display_name),
        wishlist_count: wishlist.len(),
        query: query.to_string(),
    }
}

fn header<'r>(req: &'r Request, name: &str) -> Option<&'r str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

fn param<'p>(params: &'p Params, key: &str) -> Option<&'p str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn parse_query(req: &Request) -> Params {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_form(req: &mut Request) -> Result<Params, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    Ok(form_urlencoded::parse(&body).into_owned().collect())
}
