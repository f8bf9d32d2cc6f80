use crate::portal::UserView;

/// Notified after every successful register, login and logout with the view
/// the presentation layer should now render (`None` when logged out).
pub trait SessionObserver {
    fn session_changed(&self, view: Option<&UserView>);
}

impl<F> SessionObserver for F
where
    F: Fn(Option<&UserView>),
{
    fn session_changed(&self, view: Option<&UserView>) {
        self(view);
    }
}
