/// One entry of the static condition panel shown under the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentDescriptor {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}
