//! End-to-end navigation over the application routes.

use operadora_routes::history::{HistoryBase, NavigationError, NavigationKind, Navigator};
use operadora_routes::routing::{Params, RouteError};
use operadora_routes::{app_routes, Page};

#[test]
fn test_browse_to_operadora_and_back() {
    let mut nav = Navigator::new(app_routes(), HistoryBase::default());
    nav.push("/").unwrap();

    let params: Params = [("cnpj", "12345678000190")].into_iter().collect();
    let href = nav.href("operadora", &params).unwrap();
    let visit = nav.push(&href).unwrap();

    assert_eq!(visit.kind, NavigationKind::Push);
    assert_eq!(
        Page::from_resolved(&visit.to.resolved).unwrap(),
        Page::Operadora {
            cnpj: "12345678000190".into()
        }
    );

    let back = nav.back().unwrap();
    assert_eq!(Page::from_resolved(&back.to.resolved).unwrap(), Page::Home);
}

#[test]
fn test_unknown_target_surfaces_no_match() {
    let mut nav = Navigator::new(app_routes(), HistoryBase::default());
    match nav.push("/unknown") {
        Err(NavigationError::Route(RouteError::NoMatch { path })) => assert_eq!(path, "/unknown"),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(nav.current().is_none());
}
