use crate::errors::StationResult;
use std::sync::Weak;

pub trait Observer<V>: Send + Sync {
    fn update(&self, value: V);
}

pub trait Observable<V> {
    fn register(&self, observer: Weak<dyn Observer<V> + 'static>);
    fn unregister(&self, observer: &Weak<dyn Observer<V> + 'static>) -> StationResult<()>;
    fn notify_all(&self);
}
