use crate::models::Selection;

/// Receives the finished selection and moves the user to the next screen.
pub trait Navigator: Send + Sync {
    fn navigate(&self, selection: Selection);
}

impl<F> Navigator for F
where
    F: Fn(Selection) + Send + Sync,
{
    fn navigate(&self, selection: Selection) {
        self(selection)
    }
}
