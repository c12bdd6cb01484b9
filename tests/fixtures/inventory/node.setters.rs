// Code generated by protoc-gen-prost-setters. DO NOT EDIT.
// source: inventory/node.proto
// package: inventory

impl Node {
    pub fn set_color(&mut self, value: Color) {
        self.kind = ::core::option::Option::Some(node::Kind::Color(value as i32));
    }
    pub fn set_detail(&mut self, value: Leaf) {
        self.kind = ::core::option::Option::Some(node::Kind::Detail(value));
    }
    pub fn set_parent(&mut self, value: ::core::option::Option<Node>) {
        self.parent = value.map(::prost::alloc::boxed::Box::new);
    }
    pub fn set_weight(&mut self, value: ::core::option::Option<u32>) {
        self.weight = value;
    }
    pub fn set_data(
        &mut self,
        value: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    ) {
        self.data = value;
    }
    pub fn set_leaf(&mut self, value: ::core::option::Option<Leaf>) {
        self.leaf = value;
    }
    pub fn set_colors(&mut self, value: ::prost::alloc::vec::Vec<Color>) {
        self.colors = value.into_iter().map(|v| v as i32).collect();
    }
    pub fn append_colors(&mut self, values: impl ::core::iter::IntoIterator<Item = Color>) {
        self.colors.extend(values.into_iter().map(|v| v as i32));
    }
    pub fn set_palette(
        &mut self,
        value: ::std::collections::HashMap<::prost::alloc::string::String, Color>,
    ) {
        self.palette = value.into_iter().map(|(k, v)| (k, v as i32)).collect();
    }
    pub fn set_palette_key(&mut self, key: ::prost::alloc::string::String, val: Color) {
        self.palette.insert(key, val as i32);
    }
}
impl Leaf {
    pub fn set_label(&mut self, value: ::prost::alloc::string::String) {
        self.label = value;
    }
}
