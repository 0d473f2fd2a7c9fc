#[macro_export]
macro_rules! boxnode {
    ( $name: expr, $defn: expr) => {
        Box::new($crate::linked_list::Node {
            name: $name.into(),
            defn: $defn.into(),
            next: None,
        })
    };
}

#[macro_export]
macro_rules! node {
    ( $name: expr, $defn: expr) => {
        $crate::linked_list::Node {
            name: $name.into(),
            defn: $defn.into(),
            next: None,
        }
    };
}
