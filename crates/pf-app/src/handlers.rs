//! Route table and the handlers bound to it
//!
//! Routes are checked against the active navigation when dispatched, and
//! every handler that awaits re-checks its token before touching the screen,
//! so work for a superseded navigation is dropped.

use std::sync::Arc;

use pf_core::events::events::{PageLoaded, RouteChanged, RouteNotFound};
use pf_core::{NavigationToken, Route, RouteMatch};
use pf_views::{DetailView, ResultsView, SearchView, StaticContentView, StaticPage};
use tracing::{debug, warn};

use crate::context::AppContext;
use crate::error::{AppError, Result};

pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const MISSION: &str = "mission";
pub const CONTACT: &str = "contact";
pub const RESULTS: &str = "results";
pub const PARK: &str = "park";

/// Routes in precedence order
pub fn routes() -> Vec<Route> {
    vec![
        Route::new("", HOME),
        Route::new("about", ABOUT),
        Route::new("mission", MISSION),
        Route::new("contact", CONTACT),
        Route::new("results/:queryString", RESULTS),
        Route::new("parks/:park_slug/", PARK),
    ]
}

/// Run the handler bound to `route`. A route superseded before it was
/// dispatched is dropped without touching the screen.
pub async fn dispatch(ctx: &AppContext, route: RouteMatch) -> Result<()> {
    if !ctx.still_current(&route.token, &route.handler) {
        return Ok(());
    }

    ctx.events.publish(RouteChanged {
        handler: route.handler.clone(),
        fragment: route.state.fragment(),
        seq: route.token.seq(),
    });

    match route.handler.as_str() {
        HOME => home(ctx, &route.token).await,
        ABOUT => show_static(ctx, StaticPage::About),
        MISSION => show_static(ctx, StaticPage::Mission),
        CONTACT => show_static(ctx, StaticPage::Contact),
        RESULTS => {
            let query_string = route.params.get("queryString").unwrap_or_default();
            results(ctx, query_string, &route.token).await
        }
        PARK => {
            let slug = route.params.get("park_slug").unwrap_or_default();
            park(ctx, slug, &route.token).await
        }
        other => Err(AppError::UnknownHandler(other.to_string())),
    }
}

/// Mount the fallback view for an unroutable fragment
pub fn not_found(ctx: &AppContext, path: &str) {
    warn!("Showing not-found view for '{}'", path);
    ctx.events.publish(RouteNotFound {
        path: path.to_string(),
    });
    ctx.show_main(StaticContentView::new(StaticPage::NotFound {
        path: path.to_string(),
    }));
}

fn show_static(ctx: &AppContext, page: StaticPage) -> Result<()> {
    ctx.show_main(StaticContentView::new(page));
    Ok(())
}

async fn home(ctx: &AppContext, token: &NavigationToken) -> Result<()> {
    let options = ctx.api.fetch_search_options().await;
    if !ctx.still_current(token, HOME) {
        return Ok(());
    }

    match options {
        Ok(options) => {
            ctx.show_main(SearchView::new(options, ctx.config.profile.clone()));
            Ok(())
        }
        Err(e) => {
            ctx.show_failure(HOME, &e);
            Err(AppError::data(HOME, e))
        }
    }
}

async fn results(ctx: &AppContext, query_string: &str, token: &NavigationToken) -> Result<()> {
    let collection = Arc::new(
        ctx.api
            .collection(query_string, ctx.config.profile.pagination),
    );
    let first_page = collection.fetch_first_page().await;
    if !ctx.still_current(token, RESULTS) {
        return Ok(());
    }

    let snapshot = match first_page {
        Ok(snapshot) => snapshot,
        Err(e) => {
            ctx.show_failure(RESULTS, &e);
            return Err(AppError::data(RESULTS, e));
        }
    };

    debug!("Mounting results for '{}'", query_string);
    *ctx.collection.lock() = Some(collection);
    ctx.show_main(ResultsView::new(&snapshot));
    ctx.events.publish(PageLoaded {
        page: snapshot.current_page,
        total_pages: snapshot.total_pages,
        item_count: snapshot.items.len(),
    });
    Ok(())
}

async fn park(ctx: &AppContext, slug: &str, token: &NavigationToken) -> Result<()> {
    let park = ctx.api.fetch_park(slug).await;
    if !ctx.still_current(token, PARK) {
        return Ok(());
    }

    match park {
        Ok(park) => {
            ctx.show_main(DetailView::new(park));
            Ok(())
        }
        Err(e) => {
            ctx.show_failure(PARK, &e);
            Err(AppError::data(PARK, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::Router;

    fn router() -> Router {
        let mut router = Router::new();
        for route in routes() {
            router.register(route);
        }
        router
    }

    #[test]
    fn test_route_table() {
        let router = router();
        assert_eq!(router.start("").unwrap().handler, HOME);

        let results = router
            .navigate("results/neighborhoods=3", Default::default())
            .unwrap()
            .unwrap();
        assert_eq!(results.handler, RESULTS);
        assert_eq!(results.params.get("queryString"), Some("neighborhoods=3"));

        let park = router
            .navigate("#parks/franklin-park/", Default::default())
            .unwrap()
            .unwrap();
        assert_eq!(park.handler, PARK);
        assert_eq!(park.params.get("park_slug"), Some("franklin-park"));

        assert!(router.navigate("parks/franklin-park", Default::default()).is_err());
    }
}
