use crate::resumable::Resumable;

/// An iterator that feeds a stream of inputs into a [`Resumable`].
///
/// Created by [`Resumable::drive()`].
pub struct Drive<'a, I, P: Iterator, J> {
    resumable: &'a mut Resumable<I, P>,
    inputs: J,
}

impl<'a, I, P: Iterator, J> Drive<'a, I, P, J> {
    pub(crate) fn new(resumable: &'a mut Resumable<I, P>, inputs: J) -> Self {
        Drive { resumable, inputs }
    }
}

impl<I, P, J> Iterator for Drive<'_, I, P, J>
where
    P: Iterator,
    P::Item: Clone,
    J: Iterator<Item = I>,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        // Don't pull an input we have nowhere to put.
        if !self.resumable.is_alive() {
            return None;
        }
        let input = self.inputs.next()?;
        match self.resumable.advance(input) {
            Ok(true) => self.resumable.current().cloned(),
            Ok(false) | Err(_) => None,
        }
    }
}
