use crate::{params::Params, propagation::Gradients};

pub trait Optimizer {
    fn update_params(&mut self, params: &mut Params, grads: &Gradients);
}
