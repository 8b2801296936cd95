use crate::context::element_model::{ElementDescriptor, InputSubtype};

/// Radios that share a `name`, in element order.
///
/// `name == None` is the implicit default group for unnamed radios.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioGroup<'a> {
    pub name: Option<String>,
    pub members: Vec<&'a ElementDescriptor>,
}

/// Group radio inputs by name. Groups appear in order of their first member.
pub fn group_radios<'a, I>(elements: I) -> Vec<RadioGroup<'a>>
where
    I: IntoIterator<Item = &'a ElementDescriptor>,
{
    let mut groups: Vec<RadioGroup<'a>> = Vec::new();

    for el in elements
        .into_iter()
        .filter(|e| e.is_subtype(&InputSubtype::Radio))
    {
        let key = el.name.clone();
        match groups.iter_mut().find(|g| g.name == key) {
            Some(group) => group.members.push(el),
            None => groups.push(RadioGroup {
                name: key,
                members: vec![el],
            }),
        }
    }

    groups
}
