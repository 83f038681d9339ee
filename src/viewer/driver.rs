use std::cell::RefCell;

use web_time::Instant;

use super::controller::{Completion, ViewController};
use super::state::LoadTicket;
use crate::error::LigviewError;
use crate::render::RenderEngine;
use crate::source::StructureSource;

/// Run the attempt identified by `ticket` to completion.
///
/// The controller is only borrowed between suspension points, so event
/// handlers may select another complex or unmount the view while the fetch
/// or the engine module load is pending; the attempt then ends as
/// [`Completion::Stale`] without touching the view.
pub async fn drive_load<E, S>(
    view: &RefCell<ViewController<E>>,
    source: &S,
    ticket: LoadTicket,
) -> Completion
where
    E: RenderEngine,
    S: StructureSource,
{
    let id = ticket.complex.id;
    let started = Instant::now();

    let fetched = source.fetch(id).await;
    log::debug!(
        "fetch of {id} finished in {:.0} ms",
        started.elapsed().as_secs_f64() * 1000.0
    );
    if !view.borrow().is_current(&ticket) {
        log::debug!("{id} superseded while fetching");
        return Completion::Stale;
    }

    let outcome = match fetched {
        Ok(text) => {
            let prepare = view.borrow().engine().prepare();
            prepare.await.map(|()| text).map_err(LigviewError::from)
        }
        Err(e) => Err(LigviewError::from(e)),
    };

    let completion = view.borrow_mut().finish(ticket, outcome);
    log::info!(
        "{id}: {completion:?} after {:.0} ms",
        started.elapsed().as_secs_f64() * 1000.0
    );
    completion
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::future::{ready, Future};

    use pollster::block_on;

    use super::*;
    use crate::catalog::{default_complex, find, ComplexDescriptor};
    use crate::error::FetchError;
    use crate::options::Options;
    use crate::render::{FailPoint, RecordingEngine};

    const PDB: &str = "HETATM 1  C1  STI A 201      1.000   2.000   3.000\n";

    type View = RefCell<ViewController<RecordingEngine>>;

    fn view_with(engine: RecordingEngine) -> View {
        RefCell::new(ViewController::new(
            engine,
            "viewer".to_owned(),
            Options::default(),
        ))
    }

    struct StaticSource(Result<String, FetchError>);

    impl StructureSource for StaticSource {
        fn fetch(
            &self,
            _id: &str,
        ) -> impl Future<Output = Result<String, FetchError>> {
            ready(self.0.clone())
        }
    }

    /// Simulates the user switching complexes while the request is pending.
    struct SwitchingSource<'a> {
        view: &'a View,
        switch_to: &'static ComplexDescriptor,
        issued: Cell<Option<LoadTicket>>,
    }

    impl StructureSource for SwitchingSource<'_> {
        fn fetch(
            &self,
            _id: &str,
        ) -> impl Future<Output = Result<String, FetchError>> {
            self.issued.set(self.view.borrow_mut().select(self.switch_to));
            ready(Ok(PDB.to_owned()))
        }
    }

    /// Simulates the view being torn down while the request is pending.
    struct UnmountingSource<'a> {
        view: &'a View,
    }

    impl StructureSource for UnmountingSource<'_> {
        fn fetch(
            &self,
            _id: &str,
        ) -> impl Future<Output = Result<String, FetchError>> {
            self.view.borrow_mut().unmount();
            ready(Ok(PDB.to_owned()))
        }
    }

    #[test]
    fn successful_load_displays_scene() {
        let view = view_with(RecordingEngine::new());
        let log = view.borrow().engine().log();
        let ticket = view.borrow_mut().mount();

        let completion =
            block_on(drive_load(&view, &StaticSource(Ok(PDB.to_owned())), ticket));

        assert_eq!(completion, Completion::Applied);
        assert!(view.borrow().state().is_ready());
        assert_eq!(log.live_surfaces(), 1);
    }

    #[test]
    fn http_error_is_reported() {
        let view = view_with(RecordingEngine::new());
        let ticket = view.borrow_mut().mount();
        let source = StaticSource(Err(FetchError::Status {
            id: "1OPJ".to_owned(),
            status: 503,
        }));

        assert_eq!(block_on(drive_load(&view, &source, ticket)), Completion::Failed);

        let view = view.borrow();
        assert!(!view.state().is_loading);
        assert_eq!(
            view.state().error.as_deref(),
            Some("Unable to fetch PDB 1OPJ (HTTP 503)")
        );
        assert!(!view.has_surface());
    }

    #[test]
    fn engine_unavailable_is_reported() {
        let view = view_with(RecordingEngine::new().fail_at(FailPoint::Prepare));
        let log = view.borrow().engine().log();
        let ticket = view.borrow_mut().mount();

        let completion =
            block_on(drive_load(&view, &StaticSource(Ok(PDB.to_owned())), ticket));

        assert_eq!(completion, Completion::Failed);
        let message = view.borrow().state().error.clone().unwrap();
        assert!(message.starts_with("rendering engine unavailable"));
        assert!(log.is_empty());
    }

    #[test]
    fn switch_during_fetch_only_applies_newest() {
        let view = view_with(RecordingEngine::new());
        let log = view.borrow().engine().log();
        let first = view.borrow_mut().mount();
        let source = SwitchingSource {
            view: &view,
            switch_to: find("3ERT").unwrap(),
            issued: Cell::new(None),
        };

        assert_eq!(block_on(drive_load(&view, &source, first)), Completion::Stale);
        assert!(log.is_empty());
        assert_eq!(view.borrow().state().selected.id, "3ERT");
        assert!(view.borrow().state().is_loading);

        let second = source.issued.get().unwrap();
        let completion =
            block_on(drive_load(&view, &StaticSource(Ok(PDB.to_owned())), second));
        assert_eq!(completion, Completion::Applied);
        assert_eq!(log.created_surfaces(), 1);
        assert!(view.borrow().state().is_ready());
    }

    #[test]
    fn teardown_during_fetch_is_a_no_op() {
        let view = view_with(RecordingEngine::new());
        let log = view.borrow().engine().log();
        let ticket = view.borrow_mut().mount();

        let completion =
            block_on(drive_load(&view, &UnmountingSource { view: &view }, ticket));

        assert_eq!(completion, Completion::Stale);
        assert_eq!(log.created_surfaces(), 0);
        assert_eq!(view.borrow().state().selected, default_complex());
        assert!(view.borrow().state().is_loading);
    }
}
