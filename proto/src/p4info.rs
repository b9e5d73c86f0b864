// This file is generated by rust-protobuf 2.28.0. Do not edit
// @generated

// https://github.com/rust-lang/rust-clippy/issues/702
#![allow(unknown_lints)]
#![allow(clippy::all)]

#![allow(unused_attributes)]
#![cfg_attr(rustfmt, rustfmt::skip)]

#![allow(box_pointers)]
#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(trivial_casts)]
#![allow(unused_imports)]
#![allow(unused_results)]
//! Generated file from `p4/config/v1/p4info.proto`

/// Generated files are compatible only with the same version
/// of protobuf runtime.
// const _PROTOBUF_VERSION_CHECK: () = ::protobuf::VERSION_2_28_0;

#[derive(PartialEq,Clone,Default)]
pub struct P4Info {
    // message fields
    pub pkg_info: ::protobuf::SingularPtrField<PkgInfo>,
    pub tables: ::protobuf::RepeatedField<Table>,
    pub actions: ::protobuf::RepeatedField<Action>,
    pub controller_packet_metadata: ::protobuf::RepeatedField<ControllerPacketMetadata>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a P4Info {
    fn default() -> &'a P4Info {
        <P4Info as ::protobuf::Message>::default_instance()
    }
}

impl P4Info {
    pub fn new() -> P4Info {
        ::std::default::Default::default()
    }

    // .p4.config.v1.PkgInfo pkg_info = 1;


    pub fn get_pkg_info(&self) -> &PkgInfo {
        self.pkg_info.as_ref().unwrap_or_else(|| <PkgInfo as ::protobuf::Message>::default_instance())
    }
    pub fn clear_pkg_info(&mut self) {
        self.pkg_info.clear();
    }

    pub fn has_pkg_info(&self) -> bool {
        self.pkg_info.is_some()
    }

    // Param is passed by value, moved
    pub fn set_pkg_info(&mut self, v: PkgInfo) {
        self.pkg_info = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_pkg_info(&mut self) -> &mut PkgInfo {
        if self.pkg_info.is_none() {
            self.pkg_info.set_default();
        }
        self.pkg_info.as_mut().unwrap()
    }

    // Take field
    pub fn take_pkg_info(&mut self) -> PkgInfo {
        self.pkg_info.take().unwrap_or_else(|| PkgInfo::new())
    }

    // repeated .p4.config.v1.Table tables = 2;


    pub fn get_tables(&self) -> &[Table] {
        &self.tables
    }
    pub fn clear_tables(&mut self) {
        self.tables.clear();
    }

    // Param is passed by value, moved
    pub fn set_tables(&mut self, v: ::protobuf::RepeatedField<Table>) {
        self.tables = v;
    }

    // Mutable pointer to the field.
    pub fn mut_tables(&mut self) -> &mut ::protobuf::RepeatedField<Table> {
        &mut self.tables
    }

    // Take field
    pub fn take_tables(&mut self) -> ::protobuf::RepeatedField<Table> {
        ::std::mem::replace(&mut self.tables, ::protobuf::RepeatedField::new())
    }

    // repeated .p4.config.v1.Action actions = 3;


    pub fn get_actions(&self) -> &[Action] {
        &self.actions
    }
    pub fn clear_actions(&mut self) {
        self.actions.clear();
    }

    // Param is passed by value, moved
    pub fn set_actions(&mut self, v: ::protobuf::RepeatedField<Action>) {
        self.actions = v;
    }

    // Mutable pointer to the field.
    pub fn mut_actions(&mut self) -> &mut ::protobuf::RepeatedField<Action> {
        &mut self.actions
    }

    // Take field
    pub fn take_actions(&mut self) -> ::protobuf::RepeatedField<Action> {
        ::std::mem::replace(&mut self.actions, ::protobuf::RepeatedField::new())
    }

    // repeated .p4.config.v1.ControllerPacketMetadata controller_packet_metadata = 9;


    pub fn get_controller_packet_metadata(&self) -> &[ControllerPacketMetadata] {
        &self.controller_packet_metadata
    }
    pub fn clear_controller_packet_metadata(&mut self) {
        self.controller_packet_metadata.clear();
    }

    // Param is passed by value, moved
    pub fn set_controller_packet_metadata(&mut self, v: ::protobuf::RepeatedField<ControllerPacketMetadata>) {
        self.controller_packet_metadata = v;
    }

    // Mutable pointer to the field.
    pub fn mut_controller_packet_metadata(&mut self) -> &mut ::protobuf::RepeatedField<ControllerPacketMetadata> {
        &mut self.controller_packet_metadata
    }

    // Take field
    pub fn take_controller_packet_metadata(&mut self) -> ::protobuf::RepeatedField<ControllerPacketMetadata> {
        ::std::mem::replace(&mut self.controller_packet_metadata, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for P4Info {
    fn is_initialized(&self) -> bool {
        for v in &self.pkg_info {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.tables {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.actions {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.controller_packet_metadata {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.pkg_info)?;
                },
                2 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.tables)?;
                },
                3 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.actions)?;
                },
                9 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.controller_packet_metadata)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.pkg_info.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        for value in &self.tables {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        for value in &self.actions {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        for value in &self.controller_packet_metadata {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.pkg_info.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        for v in &self.tables {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        for v in &self.actions {
            os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        for v in &self.controller_packet_metadata {
            os.write_tag(9, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> P4Info {
        P4Info::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<PkgInfo>>(
                "pkg_info",
                |m: &P4Info| { &m.pkg_info },
                |m: &mut P4Info| { &mut m.pkg_info },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Table>>(
                "tables",
                |m: &P4Info| { &m.tables },
                |m: &mut P4Info| { &mut m.tables },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Action>>(
                "actions",
                |m: &P4Info| { &m.actions },
                |m: &mut P4Info| { &mut m.actions },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<ControllerPacketMetadata>>(
                "controller_packet_metadata",
                |m: &P4Info| { &m.controller_packet_metadata },
                |m: &mut P4Info| { &mut m.controller_packet_metadata },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<P4Info>(
                "P4Info",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static P4Info {
        static instance: ::protobuf::rt::LazyV2<P4Info> = ::protobuf::rt::LazyV2::INIT;
        instance.get(P4Info::new)
    }
}

impl ::protobuf::Clear for P4Info {
    fn clear(&mut self) {
        self.pkg_info.clear();
        self.tables.clear();
        self.actions.clear();
        self.controller_packet_metadata.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for P4Info {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for P4Info {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Documentation {
    // message fields
    pub brief: ::std::string::String,
    pub description: ::std::string::String,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Documentation {
    fn default() -> &'a Documentation {
        <Documentation as ::protobuf::Message>::default_instance()
    }
}

impl Documentation {
    pub fn new() -> Documentation {
        ::std::default::Default::default()
    }

    // string brief = 1;


    pub fn get_brief(&self) -> &str {
        &self.brief
    }
    pub fn clear_brief(&mut self) {
        self.brief.clear();
    }

    // Param is passed by value, moved
    pub fn set_brief(&mut self, v: ::std::string::String) {
        self.brief = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_brief(&mut self) -> &mut ::std::string::String {
        &mut self.brief
    }

    // Take field
    pub fn take_brief(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.brief, ::std::string::String::new())
    }

    // string description = 2;


    pub fn get_description(&self) -> &str {
        &self.description
    }
    pub fn clear_description(&mut self) {
        self.description.clear();
    }

    // Param is passed by value, moved
    pub fn set_description(&mut self, v: ::std::string::String) {
        self.description = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_description(&mut self) -> &mut ::std::string::String {
        &mut self.description
    }

    // Take field
    pub fn take_description(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.description, ::std::string::String::new())
    }
}

impl ::protobuf::Message for Documentation {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.brief)?;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.description)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if !self.brief.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.brief);
        }
        if !self.description.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.description);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.brief.is_empty() {
            os.write_string(1, &self.brief)?;
        }
        if !self.description.is_empty() {
            os.write_string(2, &self.description)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Documentation {
        Documentation::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "brief",
                |m: &Documentation| { &m.brief },
                |m: &mut Documentation| { &mut m.brief },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "description",
                |m: &Documentation| { &m.description },
                |m: &mut Documentation| { &mut m.description },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Documentation>(
                "Documentation",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Documentation {
        static instance: ::protobuf::rt::LazyV2<Documentation> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Documentation::new)
    }
}

impl ::protobuf::Clear for Documentation {
    fn clear(&mut self) {
        self.brief.clear();
        self.description.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Documentation {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Documentation {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct PkgInfo {
    // message fields
    pub name: ::std::string::String,
    pub version: ::std::string::String,
    pub doc: ::protobuf::SingularPtrField<Documentation>,
    pub annotations: ::protobuf::RepeatedField<::std::string::String>,
    pub arch: ::std::string::String,
    pub organization: ::std::string::String,
    pub contact: ::std::string::String,
    pub url: ::std::string::String,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a PkgInfo {
    fn default() -> &'a PkgInfo {
        <PkgInfo as ::protobuf::Message>::default_instance()
    }
}

impl PkgInfo {
    pub fn new() -> PkgInfo {
        ::std::default::Default::default()
    }

    // string name = 1;


    pub fn get_name(&self) -> &str {
        &self.name
    }
    pub fn clear_name(&mut self) {
        self.name.clear();
    }

    // Param is passed by value, moved
    pub fn set_name(&mut self, v: ::std::string::String) {
        self.name = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_name(&mut self) -> &mut ::std::string::String {
        &mut self.name
    }

    // Take field
    pub fn take_name(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.name, ::std::string::String::new())
    }

    // string version = 2;


    pub fn get_version(&self) -> &str {
        &self.version
    }
    pub fn clear_version(&mut self) {
        self.version.clear();
    }

    // Param is passed by value, moved
    pub fn set_version(&mut self, v: ::std::string::String) {
        self.version = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_version(&mut self) -> &mut ::std::string::String {
        &mut self.version
    }

    // Take field
    pub fn take_version(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.version, ::std::string::String::new())
    }

    // .p4.config.v1.Documentation doc = 3;


    pub fn get_doc(&self) -> &Documentation {
        self.doc.as_ref().unwrap_or_else(|| <Documentation as ::protobuf::Message>::default_instance())
    }
    pub fn clear_doc(&mut self) {
        self.doc.clear();
    }

    pub fn has_doc(&self) -> bool {
        self.doc.is_some()
    }

    // Param is passed by value, moved
    pub fn set_doc(&mut self, v: Documentation) {
        self.doc = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_doc(&mut self) -> &mut Documentation {
        if self.doc.is_none() {
            self.doc.set_default();
        }
        self.doc.as_mut().unwrap()
    }

    // Take field
    pub fn take_doc(&mut self) -> Documentation {
        self.doc.take().unwrap_or_else(|| Documentation::new())
    }

    // repeated string annotations = 4;


    pub fn get_annotations(&self) -> &[::std::string::String] {
        &self.annotations
    }
    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    // Param is passed by value, moved
    pub fn set_annotations(&mut self, v: ::protobuf::RepeatedField<::std::string::String>) {
        self.annotations = v;
    }

    // Mutable pointer to the field.
    pub fn mut_annotations(&mut self) -> &mut ::protobuf::RepeatedField<::std::string::String> {
        &mut self.annotations
    }

    // Take field
    pub fn take_annotations(&mut self) -> ::protobuf::RepeatedField<::std::string::String> {
        ::std::mem::replace(&mut self.annotations, ::protobuf::RepeatedField::new())
    }

    // string arch = 5;


    pub fn get_arch(&self) -> &str {
        &self.arch
    }
    pub fn clear_arch(&mut self) {
        self.arch.clear();
    }

    // Param is passed by value, moved
    pub fn set_arch(&mut self, v: ::std::string::String) {
        self.arch = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_arch(&mut self) -> &mut ::std::string::String {
        &mut self.arch
    }

    // Take field
    pub fn take_arch(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.arch, ::std::string::String::new())
    }

    // string organization = 6;


    pub fn get_organization(&self) -> &str {
        &self.organization
    }
    pub fn clear_organization(&mut self) {
        self.organization.clear();
    }

    // Param is passed by value, moved
    pub fn set_organization(&mut self, v: ::std::string::String) {
        self.organization = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_organization(&mut self) -> &mut ::std::string::String {
        &mut self.organization
    }

    // Take field
    pub fn take_organization(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.organization, ::std::string::String::new())
    }

    // string contact = 7;


    pub fn get_contact(&self) -> &str {
        &self.contact
    }
    pub fn clear_contact(&mut self) {
        self.contact.clear();
    }

    // Param is passed by value, moved
    pub fn set_contact(&mut self, v: ::std::string::String) {
        self.contact = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_contact(&mut self) -> &mut ::std::string::String {
        &mut self.contact
    }

    // Take field
    pub fn take_contact(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.contact, ::std::string::String::new())
    }

    // string url = 8;


    pub fn get_url(&self) -> &str {
        &self.url
    }
    pub fn clear_url(&mut self) {
        self.url.clear();
    }

    // Param is passed by value, moved
    pub fn set_url(&mut self, v: ::std::string::String) {
        self.url = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_url(&mut self) -> &mut ::std::string::String {
        &mut self.url
    }

    // Take field
    pub fn take_url(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.url, ::std::string::String::new())
    }
}

impl ::protobuf::Message for PkgInfo {
    fn is_initialized(&self) -> bool {
        for v in &self.doc {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.name)?;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.version)?;
                },
                3 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.doc)?;
                },
                4 => {
                    ::protobuf::rt::read_repeated_string_into(wire_type, is, &mut self.annotations)?;
                },
                5 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.arch)?;
                },
                6 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.organization)?;
                },
                7 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.contact)?;
                },
                8 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.url)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if !self.name.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.name);
        }
        if !self.version.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.version);
        }
        if let Some(ref v) = self.doc.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        for value in &self.annotations {
            my_size += ::protobuf::rt::string_size(4, &value);
        };
        if !self.arch.is_empty() {
            my_size += ::protobuf::rt::string_size(5, &self.arch);
        }
        if !self.organization.is_empty() {
            my_size += ::protobuf::rt::string_size(6, &self.organization);
        }
        if !self.contact.is_empty() {
            my_size += ::protobuf::rt::string_size(7, &self.contact);
        }
        if !self.url.is_empty() {
            my_size += ::protobuf::rt::string_size(8, &self.url);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if !self.name.is_empty() {
            os.write_string(1, &self.name)?;
        }
        if !self.version.is_empty() {
            os.write_string(2, &self.version)?;
        }
        if let Some(ref v) = self.doc.as_ref() {
            os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        for v in &self.annotations {
            os.write_string(4, &v)?;
        };
        if !self.arch.is_empty() {
            os.write_string(5, &self.arch)?;
        }
        if !self.organization.is_empty() {
            os.write_string(6, &self.organization)?;
        }
        if !self.contact.is_empty() {
            os.write_string(7, &self.contact)?;
        }
        if !self.url.is_empty() {
            os.write_string(8, &self.url)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> PkgInfo {
        PkgInfo::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "name",
                |m: &PkgInfo| { &m.name },
                |m: &mut PkgInfo| { &mut m.name },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "version",
                |m: &PkgInfo| { &m.version },
                |m: &mut PkgInfo| { &mut m.version },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Documentation>>(
                "doc",
                |m: &PkgInfo| { &m.doc },
                |m: &mut PkgInfo| { &mut m.doc },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "annotations",
                |m: &PkgInfo| { &m.annotations },
                |m: &mut PkgInfo| { &mut m.annotations },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "arch",
                |m: &PkgInfo| { &m.arch },
                |m: &mut PkgInfo| { &mut m.arch },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "organization",
                |m: &PkgInfo| { &m.organization },
                |m: &mut PkgInfo| { &mut m.organization },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "contact",
                |m: &PkgInfo| { &m.contact },
                |m: &mut PkgInfo| { &mut m.contact },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "url",
                |m: &PkgInfo| { &m.url },
                |m: &mut PkgInfo| { &mut m.url },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<PkgInfo>(
                "PkgInfo",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static PkgInfo {
        static instance: ::protobuf::rt::LazyV2<PkgInfo> = ::protobuf::rt::LazyV2::INIT;
        instance.get(PkgInfo::new)
    }
}

impl ::protobuf::Clear for PkgInfo {
    fn clear(&mut self) {
        self.name.clear();
        self.version.clear();
        self.doc.clear();
        self.annotations.clear();
        self.arch.clear();
        self.organization.clear();
        self.contact.clear();
        self.url.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for PkgInfo {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for PkgInfo {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Preamble {
    // message fields
    pub id: u32,
    pub name: ::std::string::String,
    pub alias: ::std::string::String,
    pub annotations: ::protobuf::RepeatedField<::std::string::String>,
    pub doc: ::protobuf::SingularPtrField<Documentation>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Preamble {
    fn default() -> &'a Preamble {
        <Preamble as ::protobuf::Message>::default_instance()
    }
}

impl Preamble {
    pub fn new() -> Preamble {
        ::std::default::Default::default()
    }

    // uint32 id = 1;


    pub fn get_id(&self) -> u32 {
        self.id
    }
    pub fn clear_id(&mut self) {
        self.id = 0;
    }

    // Param is passed by value, moved
    pub fn set_id(&mut self, v: u32) {
        self.id = v;
    }

    // string name = 2;


    pub fn get_name(&self) -> &str {
        &self.name
    }
    pub fn clear_name(&mut self) {
        self.name.clear();
    }

    // Param is passed by value, moved
    pub fn set_name(&mut self, v: ::std::string::String) {
        self.name = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_name(&mut self) -> &mut ::std::string::String {
        &mut self.name
    }

    // Take field
    pub fn take_name(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.name, ::std::string::String::new())
    }

    // string alias = 3;


    pub fn get_alias(&self) -> &str {
        &self.alias
    }
    pub fn clear_alias(&mut self) {
        self.alias.clear();
    }

    // Param is passed by value, moved
    pub fn set_alias(&mut self, v: ::std::string::String) {
        self.alias = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_alias(&mut self) -> &mut ::std::string::String {
        &mut self.alias
    }

    // Take field
    pub fn take_alias(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.alias, ::std::string::String::new())
    }

    // repeated string annotations = 4;


    pub fn get_annotations(&self) -> &[::std::string::String] {
        &self.annotations
    }
    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    // Param is passed by value, moved
    pub fn set_annotations(&mut self, v: ::protobuf::RepeatedField<::std::string::String>) {
        self.annotations = v;
    }

    // Mutable pointer to the field.
    pub fn mut_annotations(&mut self) -> &mut ::protobuf::RepeatedField<::std::string::String> {
        &mut self.annotations
    }

    // Take field
    pub fn take_annotations(&mut self) -> ::protobuf::RepeatedField<::std::string::String> {
        ::std::mem::replace(&mut self.annotations, ::protobuf::RepeatedField::new())
    }

    // .p4.config.v1.Documentation doc = 5;


    pub fn get_doc(&self) -> &Documentation {
        self.doc.as_ref().unwrap_or_else(|| <Documentation as ::protobuf::Message>::default_instance())
    }
    pub fn clear_doc(&mut self) {
        self.doc.clear();
    }

    pub fn has_doc(&self) -> bool {
        self.doc.is_some()
    }

    // Param is passed by value, moved
    pub fn set_doc(&mut self, v: Documentation) {
        self.doc = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_doc(&mut self) -> &mut Documentation {
        if self.doc.is_none() {
            self.doc.set_default();
        }
        self.doc.as_mut().unwrap()
    }

    // Take field
    pub fn take_doc(&mut self) -> Documentation {
        self.doc.take().unwrap_or_else(|| Documentation::new())
    }
}

impl ::protobuf::Message for Preamble {
    fn is_initialized(&self) -> bool {
        for v in &self.doc {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.id = tmp;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.name)?;
                },
                3 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.alias)?;
                },
                4 => {
                    ::protobuf::rt::read_repeated_string_into(wire_type, is, &mut self.annotations)?;
                },
                5 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.doc)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.id, ::protobuf::wire_format::WireTypeVarint);
        }
        if !self.name.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.name);
        }
        if !self.alias.is_empty() {
            my_size += ::protobuf::rt::string_size(3, &self.alias);
        }
        for value in &self.annotations {
            my_size += ::protobuf::rt::string_size(4, &value);
        };
        if let Some(ref v) = self.doc.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.id != 0 {
            os.write_uint32(1, self.id)?;
        }
        if !self.name.is_empty() {
            os.write_string(2, &self.name)?;
        }
        if !self.alias.is_empty() {
            os.write_string(3, &self.alias)?;
        }
        for v in &self.annotations {
            os.write_string(4, &v)?;
        };
        if let Some(ref v) = self.doc.as_ref() {
            os.write_tag(5, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Preamble {
        Preamble::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "id",
                |m: &Preamble| { &m.id },
                |m: &mut Preamble| { &mut m.id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "name",
                |m: &Preamble| { &m.name },
                |m: &mut Preamble| { &mut m.name },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "alias",
                |m: &Preamble| { &m.alias },
                |m: &mut Preamble| { &mut m.alias },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "annotations",
                |m: &Preamble| { &m.annotations },
                |m: &mut Preamble| { &mut m.annotations },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Documentation>>(
                "doc",
                |m: &Preamble| { &m.doc },
                |m: &mut Preamble| { &mut m.doc },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Preamble>(
                "Preamble",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Preamble {
        static instance: ::protobuf::rt::LazyV2<Preamble> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Preamble::new)
    }
}

impl ::protobuf::Clear for Preamble {
    fn clear(&mut self) {
        self.id = 0;
        self.name.clear();
        self.alias.clear();
        self.annotations.clear();
        self.doc.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Preamble {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Preamble {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct MatchField {
    // message fields
    pub id: u32,
    pub name: ::std::string::String,
    pub annotations: ::protobuf::RepeatedField<::std::string::String>,
    pub bitwidth: i32,
    pub doc: ::protobuf::SingularPtrField<Documentation>,
    // message oneof groups
    pub field_match: ::std::option::Option<MatchField_oneof_match>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a MatchField {
    fn default() -> &'a MatchField {
        <MatchField as ::protobuf::Message>::default_instance()
    }
}

#[derive(Clone,PartialEq,Debug)]
pub enum MatchField_oneof_match {
    match_type(MatchField_MatchType),
    other_match_type(::std::string::String),
}

impl MatchField {
    pub fn new() -> MatchField {
        ::std::default::Default::default()
    }

    // uint32 id = 1;


    pub fn get_id(&self) -> u32 {
        self.id
    }
    pub fn clear_id(&mut self) {
        self.id = 0;
    }

    // Param is passed by value, moved
    pub fn set_id(&mut self, v: u32) {
        self.id = v;
    }

    // string name = 2;


    pub fn get_name(&self) -> &str {
        &self.name
    }
    pub fn clear_name(&mut self) {
        self.name.clear();
    }

    // Param is passed by value, moved
    pub fn set_name(&mut self, v: ::std::string::String) {
        self.name = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_name(&mut self) -> &mut ::std::string::String {
        &mut self.name
    }

    // Take field
    pub fn take_name(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.name, ::std::string::String::new())
    }

    // repeated string annotations = 3;


    pub fn get_annotations(&self) -> &[::std::string::String] {
        &self.annotations
    }
    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    // Param is passed by value, moved
    pub fn set_annotations(&mut self, v: ::protobuf::RepeatedField<::std::string::String>) {
        self.annotations = v;
    }

    // Mutable pointer to the field.
    pub fn mut_annotations(&mut self) -> &mut ::protobuf::RepeatedField<::std::string::String> {
        &mut self.annotations
    }

    // Take field
    pub fn take_annotations(&mut self) -> ::protobuf::RepeatedField<::std::string::String> {
        ::std::mem::replace(&mut self.annotations, ::protobuf::RepeatedField::new())
    }

    // int32 bitwidth = 4;


    pub fn get_bitwidth(&self) -> i32 {
        self.bitwidth
    }
    pub fn clear_bitwidth(&mut self) {
        self.bitwidth = 0;
    }

    // Param is passed by value, moved
    pub fn set_bitwidth(&mut self, v: i32) {
        self.bitwidth = v;
    }

    // .p4.config.v1.MatchField.MatchType match_type = 5;


    pub fn get_match_type(&self) -> MatchField_MatchType {
        match self.field_match {
            ::std::option::Option::Some(MatchField_oneof_match::match_type(v)) => v,
            _ => MatchField_MatchType::UNSPECIFIED,
        }
    }
    pub fn clear_match_type(&mut self) {
        self.field_match = ::std::option::Option::None;
    }

    pub fn has_match_type(&self) -> bool {
        match self.field_match {
            ::std::option::Option::Some(MatchField_oneof_match::match_type(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_match_type(&mut self, v: MatchField_MatchType) {
        self.field_match = ::std::option::Option::Some(MatchField_oneof_match::match_type(v))
    }

    // string other_match_type = 7;


    pub fn get_other_match_type(&self) -> &str {
        match self.field_match {
            ::std::option::Option::Some(MatchField_oneof_match::other_match_type(ref v)) => v,
            _ => "",
        }
    }
    pub fn clear_other_match_type(&mut self) {
        self.field_match = ::std::option::Option::None;
    }

    pub fn has_other_match_type(&self) -> bool {
        match self.field_match {
            ::std::option::Option::Some(MatchField_oneof_match::other_match_type(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_other_match_type(&mut self, v: ::std::string::String) {
        self.field_match = ::std::option::Option::Some(MatchField_oneof_match::other_match_type(v))
    }

    // Mutable pointer to the field.
    pub fn mut_other_match_type(&mut self) -> &mut ::std::string::String {
        if let ::std::option::Option::Some(MatchField_oneof_match::other_match_type(_)) = self.field_match {
        } else {
            self.field_match = ::std::option::Option::Some(MatchField_oneof_match::other_match_type(::std::string::String::new()));
        }
        match self.field_match {
            ::std::option::Option::Some(MatchField_oneof_match::other_match_type(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_other_match_type(&mut self) -> ::std::string::String {
        if self.has_other_match_type() {
            match self.field_match.take() {
                ::std::option::Option::Some(MatchField_oneof_match::other_match_type(v)) => v,
                _ => panic!(),
            }
        } else {
            ::std::string::String::new()
        }
    }

    // .p4.config.v1.Documentation doc = 6;


    pub fn get_doc(&self) -> &Documentation {
        self.doc.as_ref().unwrap_or_else(|| <Documentation as ::protobuf::Message>::default_instance())
    }
    pub fn clear_doc(&mut self) {
        self.doc.clear();
    }

    pub fn has_doc(&self) -> bool {
        self.doc.is_some()
    }

    // Param is passed by value, moved
    pub fn set_doc(&mut self, v: Documentation) {
        self.doc = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_doc(&mut self) -> &mut Documentation {
        if self.doc.is_none() {
            self.doc.set_default();
        }
        self.doc.as_mut().unwrap()
    }

    // Take field
    pub fn take_doc(&mut self) -> Documentation {
        self.doc.take().unwrap_or_else(|| Documentation::new())
    }
}

impl ::protobuf::Message for MatchField {
    fn is_initialized(&self) -> bool {
        for v in &self.doc {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.id = tmp;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.name)?;
                },
                3 => {
                    ::protobuf::rt::read_repeated_string_into(wire_type, is, &mut self.annotations)?;
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int32()?;
                    self.bitwidth = tmp;
                },
                5 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.field_match = ::std::option::Option::Some(MatchField_oneof_match::match_type(is.read_enum()?));
                },
                7 => {
                    if wire_type != ::protobuf::wire_format::WireTypeLengthDelimited {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    self.field_match = ::std::option::Option::Some(MatchField_oneof_match::other_match_type(is.read_string()?));
                },
                6 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.doc)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.id, ::protobuf::wire_format::WireTypeVarint);
        }
        if !self.name.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.name);
        }
        for value in &self.annotations {
            my_size += ::protobuf::rt::string_size(3, &value);
        };
        if self.bitwidth != 0 {
            my_size += ::protobuf::rt::value_size(4, self.bitwidth, ::protobuf::wire_format::WireTypeVarint);
        }
        if let Some(ref v) = self.doc.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        if let ::std::option::Option::Some(ref v) = self.field_match {
            match v {
                &MatchField_oneof_match::match_type(v) => {
                    my_size += ::protobuf::rt::enum_size(5, v);
                },
                &MatchField_oneof_match::other_match_type(ref v) => {
                    my_size += ::protobuf::rt::string_size(7, &v);
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.id != 0 {
            os.write_uint32(1, self.id)?;
        }
        if !self.name.is_empty() {
            os.write_string(2, &self.name)?;
        }
        for v in &self.annotations {
            os.write_string(3, &v)?;
        };
        if self.bitwidth != 0 {
            os.write_int32(4, self.bitwidth)?;
        }
        if let Some(ref v) = self.doc.as_ref() {
            os.write_tag(6, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        if let ::std::option::Option::Some(ref v) = self.field_match {
            match v {
                &MatchField_oneof_match::match_type(v) => {
                    os.write_enum(5, ::protobuf::ProtobufEnum::value(&v))?;
                },
                &MatchField_oneof_match::other_match_type(ref v) => {
                    os.write_string(7, v)?;
                },
            };
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> MatchField {
        MatchField::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "id",
                |m: &MatchField| { &m.id },
                |m: &mut MatchField| { &mut m.id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "name",
                |m: &MatchField| { &m.name },
                |m: &mut MatchField| { &mut m.name },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "annotations",
                |m: &MatchField| { &m.annotations },
                |m: &mut MatchField| { &mut m.annotations },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt32>(
                "bitwidth",
                |m: &MatchField| { &m.bitwidth },
                |m: &mut MatchField| { &mut m.bitwidth },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_enum_accessor::<_, MatchField_MatchType>(
                "match_type",
                MatchField::has_match_type,
                MatchField::get_match_type,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_string_accessor::<_>(
                "other_match_type",
                MatchField::has_other_match_type,
                MatchField::get_other_match_type,
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Documentation>>(
                "doc",
                |m: &MatchField| { &m.doc },
                |m: &mut MatchField| { &mut m.doc },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<MatchField>(
                "MatchField",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static MatchField {
        static instance: ::protobuf::rt::LazyV2<MatchField> = ::protobuf::rt::LazyV2::INIT;
        instance.get(MatchField::new)
    }
}

impl ::protobuf::Clear for MatchField {
    fn clear(&mut self) {
        self.id = 0;
        self.name.clear();
        self.annotations.clear();
        self.bitwidth = 0;
        self.field_match = ::std::option::Option::None;
        self.field_match = ::std::option::Option::None;
        self.doc.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for MatchField {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for MatchField {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum MatchField_MatchType {
    UNSPECIFIED = 0,
    EXACT = 2,
    LPM = 3,
    TERNARY = 4,
    RANGE = 5,
    OPTIONAL = 6,
}

impl ::protobuf::ProtobufEnum for MatchField_MatchType {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<MatchField_MatchType> {
        match value {
            0 => ::std::option::Option::Some(MatchField_MatchType::UNSPECIFIED),
            2 => ::std::option::Option::Some(MatchField_MatchType::EXACT),
            3 => ::std::option::Option::Some(MatchField_MatchType::LPM),
            4 => ::std::option::Option::Some(MatchField_MatchType::TERNARY),
            5 => ::std::option::Option::Some(MatchField_MatchType::RANGE),
            6 => ::std::option::Option::Some(MatchField_MatchType::OPTIONAL),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [MatchField_MatchType] = &[
            MatchField_MatchType::UNSPECIFIED,
            MatchField_MatchType::EXACT,
            MatchField_MatchType::LPM,
            MatchField_MatchType::TERNARY,
            MatchField_MatchType::RANGE,
            MatchField_MatchType::OPTIONAL,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<MatchField_MatchType>("MatchField.MatchType", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for MatchField_MatchType {
}

impl ::std::default::Default for MatchField_MatchType {
    fn default() -> Self {
        MatchField_MatchType::UNSPECIFIED
    }
}

impl ::protobuf::reflect::ProtobufValue for MatchField_MatchType {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Table {
    // message fields
    pub preamble: ::protobuf::SingularPtrField<Preamble>,
    pub match_fields: ::protobuf::RepeatedField<MatchField>,
    pub action_refs: ::protobuf::RepeatedField<ActionRef>,
    pub const_default_action_id: u32,
    pub implementation_id: u32,
    pub direct_resource_ids: ::std::vec::Vec<u32>,
    pub size: i64,
    pub idle_timeout_behavior: Table_IdleTimeoutBehavior,
    pub is_const_table: bool,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Table {
    fn default() -> &'a Table {
        <Table as ::protobuf::Message>::default_instance()
    }
}

impl Table {
    pub fn new() -> Table {
        ::std::default::Default::default()
    }

    // .p4.config.v1.Preamble preamble = 1;


    pub fn get_preamble(&self) -> &Preamble {
        self.preamble.as_ref().unwrap_or_else(|| <Preamble as ::protobuf::Message>::default_instance())
    }
    pub fn clear_preamble(&mut self) {
        self.preamble.clear();
    }

    pub fn has_preamble(&self) -> bool {
        self.preamble.is_some()
    }

    // Param is passed by value, moved
    pub fn set_preamble(&mut self, v: Preamble) {
        self.preamble = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_preamble(&mut self) -> &mut Preamble {
        if self.preamble.is_none() {
            self.preamble.set_default();
        }
        self.preamble.as_mut().unwrap()
    }

    // Take field
    pub fn take_preamble(&mut self) -> Preamble {
        self.preamble.take().unwrap_or_else(|| Preamble::new())
    }

    // repeated .p4.config.v1.MatchField match_fields = 2;


    pub fn get_match_fields(&self) -> &[MatchField] {
        &self.match_fields
    }
    pub fn clear_match_fields(&mut self) {
        self.match_fields.clear();
    }

    // Param is passed by value, moved
    pub fn set_match_fields(&mut self, v: ::protobuf::RepeatedField<MatchField>) {
        self.match_fields = v;
    }

    // Mutable pointer to the field.
    pub fn mut_match_fields(&mut self) -> &mut ::protobuf::RepeatedField<MatchField> {
        &mut self.match_fields
    }

    // Take field
    pub fn take_match_fields(&mut self) -> ::protobuf::RepeatedField<MatchField> {
        ::std::mem::replace(&mut self.match_fields, ::protobuf::RepeatedField::new())
    }

    // repeated .p4.config.v1.ActionRef action_refs = 3;


    pub fn get_action_refs(&self) -> &[ActionRef] {
        &self.action_refs
    }
    pub fn clear_action_refs(&mut self) {
        self.action_refs.clear();
    }

    // Param is passed by value, moved
    pub fn set_action_refs(&mut self, v: ::protobuf::RepeatedField<ActionRef>) {
        self.action_refs = v;
    }

    // Mutable pointer to the field.
    pub fn mut_action_refs(&mut self) -> &mut ::protobuf::RepeatedField<ActionRef> {
        &mut self.action_refs
    }

    // Take field
    pub fn take_action_refs(&mut self) -> ::protobuf::RepeatedField<ActionRef> {
        ::std::mem::replace(&mut self.action_refs, ::protobuf::RepeatedField::new())
    }

    // uint32 const_default_action_id = 4;


    pub fn get_const_default_action_id(&self) -> u32 {
        self.const_default_action_id
    }
    pub fn clear_const_default_action_id(&mut self) {
        self.const_default_action_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_const_default_action_id(&mut self, v: u32) {
        self.const_default_action_id = v;
    }

    // uint32 implementation_id = 6;


    pub fn get_implementation_id(&self) -> u32 {
        self.implementation_id
    }
    pub fn clear_implementation_id(&mut self) {
        self.implementation_id = 0;
    }

    // Param is passed by value, moved
    pub fn set_implementation_id(&mut self, v: u32) {
        self.implementation_id = v;
    }

    // repeated uint32 direct_resource_ids = 7;


    pub fn get_direct_resource_ids(&self) -> &[u32] {
        &self.direct_resource_ids
    }
    pub fn clear_direct_resource_ids(&mut self) {
        self.direct_resource_ids.clear();
    }

    // Param is passed by value, moved
    pub fn set_direct_resource_ids(&mut self, v: ::std::vec::Vec<u32>) {
        self.direct_resource_ids = v;
    }

    // Mutable pointer to the field.
    pub fn mut_direct_resource_ids(&mut self) -> &mut ::std::vec::Vec<u32> {
        &mut self.direct_resource_ids
    }

    // Take field
    pub fn take_direct_resource_ids(&mut self) -> ::std::vec::Vec<u32> {
        ::std::mem::replace(&mut self.direct_resource_ids, ::std::vec::Vec::new())
    }

    // int64 size = 8;


    pub fn get_size(&self) -> i64 {
        self.size
    }
    pub fn clear_size(&mut self) {
        self.size = 0;
    }

    // Param is passed by value, moved
    pub fn set_size(&mut self, v: i64) {
        self.size = v;
    }

    // .p4.config.v1.Table.IdleTimeoutBehavior idle_timeout_behavior = 9;


    pub fn get_idle_timeout_behavior(&self) -> Table_IdleTimeoutBehavior {
        self.idle_timeout_behavior
    }
    pub fn clear_idle_timeout_behavior(&mut self) {
        self.idle_timeout_behavior = Table_IdleTimeoutBehavior::NO_TIMEOUT;
    }

    // Param is passed by value, moved
    pub fn set_idle_timeout_behavior(&mut self, v: Table_IdleTimeoutBehavior) {
        self.idle_timeout_behavior = v;
    }

    // bool is_const_table = 10;


    pub fn get_is_const_table(&self) -> bool {
        self.is_const_table
    }
    pub fn clear_is_const_table(&mut self) {
        self.is_const_table = false;
    }

    // Param is passed by value, moved
    pub fn set_is_const_table(&mut self, v: bool) {
        self.is_const_table = v;
    }
}

impl ::protobuf::Message for Table {
    fn is_initialized(&self) -> bool {
        for v in &self.preamble {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.match_fields {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.action_refs {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.preamble)?;
                },
                2 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.match_fields)?;
                },
                3 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.action_refs)?;
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.const_default_action_id = tmp;
                },
                6 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.implementation_id = tmp;
                },
                7 => {
                    ::protobuf::rt::read_repeated_uint32_into(wire_type, is, &mut self.direct_resource_ids)?;
                },
                8 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int64()?;
                    self.size = tmp;
                },
                9 => {
                    ::protobuf::rt::read_proto3_enum_with_unknown_fields_into(wire_type, is, &mut self.idle_timeout_behavior, 9, &mut self.unknown_fields)?
                },
                10 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_bool()?;
                    self.is_const_table = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.preamble.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        for value in &self.match_fields {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        for value in &self.action_refs {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        if self.const_default_action_id != 0 {
            my_size += ::protobuf::rt::value_size(4, self.const_default_action_id, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.implementation_id != 0 {
            my_size += ::protobuf::rt::value_size(6, self.implementation_id, ::protobuf::wire_format::WireTypeVarint);
        }
        for value in &self.direct_resource_ids {
            my_size += ::protobuf::rt::value_size(7, *value, ::protobuf::wire_format::WireTypeVarint);
        };
        if self.size != 0 {
            my_size += ::protobuf::rt::value_size(8, self.size, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.idle_timeout_behavior != Table_IdleTimeoutBehavior::NO_TIMEOUT {
            my_size += ::protobuf::rt::enum_size(9, self.idle_timeout_behavior);
        }
        if self.is_const_table != false {
            my_size += 2;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.preamble.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        for v in &self.match_fields {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        for v in &self.action_refs {
            os.write_tag(3, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        if self.const_default_action_id != 0 {
            os.write_uint32(4, self.const_default_action_id)?;
        }
        if self.implementation_id != 0 {
            os.write_uint32(6, self.implementation_id)?;
        }
        for v in &self.direct_resource_ids {
            os.write_uint32(7, *v)?;
        };
        if self.size != 0 {
            os.write_int64(8, self.size)?;
        }
        if self.idle_timeout_behavior != Table_IdleTimeoutBehavior::NO_TIMEOUT {
            os.write_enum(9, ::protobuf::ProtobufEnum::value(&self.idle_timeout_behavior))?;
        }
        if self.is_const_table != false {
            os.write_bool(10, self.is_const_table)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Table {
        Table::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Preamble>>(
                "preamble",
                |m: &Table| { &m.preamble },
                |m: &mut Table| { &mut m.preamble },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<MatchField>>(
                "match_fields",
                |m: &Table| { &m.match_fields },
                |m: &mut Table| { &mut m.match_fields },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<ActionRef>>(
                "action_refs",
                |m: &Table| { &m.action_refs },
                |m: &mut Table| { &mut m.action_refs },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "const_default_action_id",
                |m: &Table| { &m.const_default_action_id },
                |m: &mut Table| { &mut m.const_default_action_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "implementation_id",
                |m: &Table| { &m.implementation_id },
                |m: &mut Table| { &mut m.implementation_id },
            ));
            fields.push(::protobuf::reflect::accessor::make_vec_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "direct_resource_ids",
                |m: &Table| { &m.direct_resource_ids },
                |m: &mut Table| { &mut m.direct_resource_ids },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt64>(
                "size",
                |m: &Table| { &m.size },
                |m: &mut Table| { &mut m.size },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeEnum<Table_IdleTimeoutBehavior>>(
                "idle_timeout_behavior",
                |m: &Table| { &m.idle_timeout_behavior },
                |m: &mut Table| { &mut m.idle_timeout_behavior },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeBool>(
                "is_const_table",
                |m: &Table| { &m.is_const_table },
                |m: &mut Table| { &mut m.is_const_table },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Table>(
                "Table",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Table {
        static instance: ::protobuf::rt::LazyV2<Table> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Table::new)
    }
}

impl ::protobuf::Clear for Table {
    fn clear(&mut self) {
        self.preamble.clear();
        self.match_fields.clear();
        self.action_refs.clear();
        self.const_default_action_id = 0;
        self.implementation_id = 0;
        self.direct_resource_ids.clear();
        self.size = 0;
        self.idle_timeout_behavior = Table_IdleTimeoutBehavior::NO_TIMEOUT;
        self.is_const_table = false;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Table {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Table {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum Table_IdleTimeoutBehavior {
    NO_TIMEOUT = 0,
    NOTIFY_CONTROL = 1,
}

impl ::protobuf::ProtobufEnum for Table_IdleTimeoutBehavior {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<Table_IdleTimeoutBehavior> {
        match value {
            0 => ::std::option::Option::Some(Table_IdleTimeoutBehavior::NO_TIMEOUT),
            1 => ::std::option::Option::Some(Table_IdleTimeoutBehavior::NOTIFY_CONTROL),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [Table_IdleTimeoutBehavior] = &[
            Table_IdleTimeoutBehavior::NO_TIMEOUT,
            Table_IdleTimeoutBehavior::NOTIFY_CONTROL,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<Table_IdleTimeoutBehavior>("Table.IdleTimeoutBehavior", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for Table_IdleTimeoutBehavior {
}

impl ::std::default::Default for Table_IdleTimeoutBehavior {
    fn default() -> Self {
        Table_IdleTimeoutBehavior::NO_TIMEOUT
    }
}

impl ::protobuf::reflect::ProtobufValue for Table_IdleTimeoutBehavior {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct ActionRef {
    // message fields
    pub id: u32,
    pub scope: ActionRef_Scope,
    pub annotations: ::protobuf::RepeatedField<::std::string::String>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a ActionRef {
    fn default() -> &'a ActionRef {
        <ActionRef as ::protobuf::Message>::default_instance()
    }
}

impl ActionRef {
    pub fn new() -> ActionRef {
        ::std::default::Default::default()
    }

    // uint32 id = 1;


    pub fn get_id(&self) -> u32 {
        self.id
    }
    pub fn clear_id(&mut self) {
        self.id = 0;
    }

    // Param is passed by value, moved
    pub fn set_id(&mut self, v: u32) {
        self.id = v;
    }

    // .p4.config.v1.ActionRef.Scope scope = 3;


    pub fn get_scope(&self) -> ActionRef_Scope {
        self.scope
    }
    pub fn clear_scope(&mut self) {
        self.scope = ActionRef_Scope::TABLE_AND_DEFAULT;
    }

    // Param is passed by value, moved
    pub fn set_scope(&mut self, v: ActionRef_Scope) {
        self.scope = v;
    }

    // repeated string annotations = 2;


    pub fn get_annotations(&self) -> &[::std::string::String] {
        &self.annotations
    }
    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    // Param is passed by value, moved
    pub fn set_annotations(&mut self, v: ::protobuf::RepeatedField<::std::string::String>) {
        self.annotations = v;
    }

    // Mutable pointer to the field.
    pub fn mut_annotations(&mut self) -> &mut ::protobuf::RepeatedField<::std::string::String> {
        &mut self.annotations
    }

    // Take field
    pub fn take_annotations(&mut self) -> ::protobuf::RepeatedField<::std::string::String> {
        ::std::mem::replace(&mut self.annotations, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for ActionRef {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.id = tmp;
                },
                3 => {
                    ::protobuf::rt::read_proto3_enum_with_unknown_fields_into(wire_type, is, &mut self.scope, 3, &mut self.unknown_fields)?
                },
                2 => {
                    ::protobuf::rt::read_repeated_string_into(wire_type, is, &mut self.annotations)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.id, ::protobuf::wire_format::WireTypeVarint);
        }
        if self.scope != ActionRef_Scope::TABLE_AND_DEFAULT {
            my_size += ::protobuf::rt::enum_size(3, self.scope);
        }
        for value in &self.annotations {
            my_size += ::protobuf::rt::string_size(2, &value);
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.id != 0 {
            os.write_uint32(1, self.id)?;
        }
        if self.scope != ActionRef_Scope::TABLE_AND_DEFAULT {
            os.write_enum(3, ::protobuf::ProtobufEnum::value(&self.scope))?;
        }
        for v in &self.annotations {
            os.write_string(2, &v)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> ActionRef {
        ActionRef::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "id",
                |m: &ActionRef| { &m.id },
                |m: &mut ActionRef| { &mut m.id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeEnum<ActionRef_Scope>>(
                "scope",
                |m: &ActionRef| { &m.scope },
                |m: &mut ActionRef| { &mut m.scope },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "annotations",
                |m: &ActionRef| { &m.annotations },
                |m: &mut ActionRef| { &mut m.annotations },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<ActionRef>(
                "ActionRef",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static ActionRef {
        static instance: ::protobuf::rt::LazyV2<ActionRef> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ActionRef::new)
    }
}

impl ::protobuf::Clear for ActionRef {
    fn clear(&mut self) {
        self.id = 0;
        self.scope = ActionRef_Scope::TABLE_AND_DEFAULT;
        self.annotations.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for ActionRef {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ActionRef {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(Clone,PartialEq,Eq,Debug,Hash)]
pub enum ActionRef_Scope {
    TABLE_AND_DEFAULT = 0,
    TABLE_ONLY = 1,
    DEFAULT_ONLY = 2,
}

impl ::protobuf::ProtobufEnum for ActionRef_Scope {
    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<ActionRef_Scope> {
        match value {
            0 => ::std::option::Option::Some(ActionRef_Scope::TABLE_AND_DEFAULT),
            1 => ::std::option::Option::Some(ActionRef_Scope::TABLE_ONLY),
            2 => ::std::option::Option::Some(ActionRef_Scope::DEFAULT_ONLY),
            _ => ::std::option::Option::None
        }
    }

    fn values() -> &'static [Self] {
        static values: &'static [ActionRef_Scope] = &[
            ActionRef_Scope::TABLE_AND_DEFAULT,
            ActionRef_Scope::TABLE_ONLY,
            ActionRef_Scope::DEFAULT_ONLY,
        ];
        values
    }

    fn enum_descriptor_static() -> &'static ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            ::protobuf::reflect::EnumDescriptor::new_pb_name::<ActionRef_Scope>("ActionRef.Scope", file_descriptor_proto())
        })
    }
}

impl ::std::marker::Copy for ActionRef_Scope {
}

impl ::std::default::Default for ActionRef_Scope {
    fn default() -> Self {
        ActionRef_Scope::TABLE_AND_DEFAULT
    }
}

impl ::protobuf::reflect::ProtobufValue for ActionRef_Scope {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Enum(::protobuf::ProtobufEnum::descriptor(self))
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Action {
    // message fields
    pub preamble: ::protobuf::SingularPtrField<Preamble>,
    pub params: ::protobuf::RepeatedField<Action_Param>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Action {
    fn default() -> &'a Action {
        <Action as ::protobuf::Message>::default_instance()
    }
}

impl Action {
    pub fn new() -> Action {
        ::std::default::Default::default()
    }

    // .p4.config.v1.Preamble preamble = 1;


    pub fn get_preamble(&self) -> &Preamble {
        self.preamble.as_ref().unwrap_or_else(|| <Preamble as ::protobuf::Message>::default_instance())
    }
    pub fn clear_preamble(&mut self) {
        self.preamble.clear();
    }

    pub fn has_preamble(&self) -> bool {
        self.preamble.is_some()
    }

    // Param is passed by value, moved
    pub fn set_preamble(&mut self, v: Preamble) {
        self.preamble = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_preamble(&mut self) -> &mut Preamble {
        if self.preamble.is_none() {
            self.preamble.set_default();
        }
        self.preamble.as_mut().unwrap()
    }

    // Take field
    pub fn take_preamble(&mut self) -> Preamble {
        self.preamble.take().unwrap_or_else(|| Preamble::new())
    }

    // repeated .p4.config.v1.Action.Param params = 2;


    pub fn get_params(&self) -> &[Action_Param] {
        &self.params
    }
    pub fn clear_params(&mut self) {
        self.params.clear();
    }

    // Param is passed by value, moved
    pub fn set_params(&mut self, v: ::protobuf::RepeatedField<Action_Param>) {
        self.params = v;
    }

    // Mutable pointer to the field.
    pub fn mut_params(&mut self) -> &mut ::protobuf::RepeatedField<Action_Param> {
        &mut self.params
    }

    // Take field
    pub fn take_params(&mut self) -> ::protobuf::RepeatedField<Action_Param> {
        ::std::mem::replace(&mut self.params, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for Action {
    fn is_initialized(&self) -> bool {
        for v in &self.preamble {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.params {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.preamble)?;
                },
                2 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.params)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.preamble.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        for value in &self.params {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.preamble.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        for v in &self.params {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Action {
        Action::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Preamble>>(
                "preamble",
                |m: &Action| { &m.preamble },
                |m: &mut Action| { &mut m.preamble },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Action_Param>>(
                "params",
                |m: &Action| { &m.params },
                |m: &mut Action| { &mut m.params },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Action>(
                "Action",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Action {
        static instance: ::protobuf::rt::LazyV2<Action> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Action::new)
    }
}

impl ::protobuf::Clear for Action {
    fn clear(&mut self) {
        self.preamble.clear();
        self.params.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Action {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Action {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct Action_Param {
    // message fields
    pub id: u32,
    pub name: ::std::string::String,
    pub annotations: ::protobuf::RepeatedField<::std::string::String>,
    pub bitwidth: i32,
    pub doc: ::protobuf::SingularPtrField<Documentation>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a Action_Param {
    fn default() -> &'a Action_Param {
        <Action_Param as ::protobuf::Message>::default_instance()
    }
}

impl Action_Param {
    pub fn new() -> Action_Param {
        ::std::default::Default::default()
    }

    // uint32 id = 1;


    pub fn get_id(&self) -> u32 {
        self.id
    }
    pub fn clear_id(&mut self) {
        self.id = 0;
    }

    // Param is passed by value, moved
    pub fn set_id(&mut self, v: u32) {
        self.id = v;
    }

    // string name = 2;


    pub fn get_name(&self) -> &str {
        &self.name
    }
    pub fn clear_name(&mut self) {
        self.name.clear();
    }

    // Param is passed by value, moved
    pub fn set_name(&mut self, v: ::std::string::String) {
        self.name = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_name(&mut self) -> &mut ::std::string::String {
        &mut self.name
    }

    // Take field
    pub fn take_name(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.name, ::std::string::String::new())
    }

    // repeated string annotations = 3;


    pub fn get_annotations(&self) -> &[::std::string::String] {
        &self.annotations
    }
    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    // Param is passed by value, moved
    pub fn set_annotations(&mut self, v: ::protobuf::RepeatedField<::std::string::String>) {
        self.annotations = v;
    }

    // Mutable pointer to the field.
    pub fn mut_annotations(&mut self) -> &mut ::protobuf::RepeatedField<::std::string::String> {
        &mut self.annotations
    }

    // Take field
    pub fn take_annotations(&mut self) -> ::protobuf::RepeatedField<::std::string::String> {
        ::std::mem::replace(&mut self.annotations, ::protobuf::RepeatedField::new())
    }

    // int32 bitwidth = 4;


    pub fn get_bitwidth(&self) -> i32 {
        self.bitwidth
    }
    pub fn clear_bitwidth(&mut self) {
        self.bitwidth = 0;
    }

    // Param is passed by value, moved
    pub fn set_bitwidth(&mut self, v: i32) {
        self.bitwidth = v;
    }

    // .p4.config.v1.Documentation doc = 5;


    pub fn get_doc(&self) -> &Documentation {
        self.doc.as_ref().unwrap_or_else(|| <Documentation as ::protobuf::Message>::default_instance())
    }
    pub fn clear_doc(&mut self) {
        self.doc.clear();
    }

    pub fn has_doc(&self) -> bool {
        self.doc.is_some()
    }

    // Param is passed by value, moved
    pub fn set_doc(&mut self, v: Documentation) {
        self.doc = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_doc(&mut self) -> &mut Documentation {
        if self.doc.is_none() {
            self.doc.set_default();
        }
        self.doc.as_mut().unwrap()
    }

    // Take field
    pub fn take_doc(&mut self) -> Documentation {
        self.doc.take().unwrap_or_else(|| Documentation::new())
    }
}

impl ::protobuf::Message for Action_Param {
    fn is_initialized(&self) -> bool {
        for v in &self.doc {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.id = tmp;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.name)?;
                },
                3 => {
                    ::protobuf::rt::read_repeated_string_into(wire_type, is, &mut self.annotations)?;
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int32()?;
                    self.bitwidth = tmp;
                },
                5 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.doc)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.id, ::protobuf::wire_format::WireTypeVarint);
        }
        if !self.name.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.name);
        }
        for value in &self.annotations {
            my_size += ::protobuf::rt::string_size(3, &value);
        };
        if self.bitwidth != 0 {
            my_size += ::protobuf::rt::value_size(4, self.bitwidth, ::protobuf::wire_format::WireTypeVarint);
        }
        if let Some(ref v) = self.doc.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.id != 0 {
            os.write_uint32(1, self.id)?;
        }
        if !self.name.is_empty() {
            os.write_string(2, &self.name)?;
        }
        for v in &self.annotations {
            os.write_string(3, &v)?;
        };
        if self.bitwidth != 0 {
            os.write_int32(4, self.bitwidth)?;
        }
        if let Some(ref v) = self.doc.as_ref() {
            os.write_tag(5, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> Action_Param {
        Action_Param::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "id",
                |m: &Action_Param| { &m.id },
                |m: &mut Action_Param| { &mut m.id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "name",
                |m: &Action_Param| { &m.name },
                |m: &mut Action_Param| { &mut m.name },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "annotations",
                |m: &Action_Param| { &m.annotations },
                |m: &mut Action_Param| { &mut m.annotations },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt32>(
                "bitwidth",
                |m: &Action_Param| { &m.bitwidth },
                |m: &mut Action_Param| { &mut m.bitwidth },
            ));
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Documentation>>(
                "doc",
                |m: &Action_Param| { &m.doc },
                |m: &mut Action_Param| { &mut m.doc },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<Action_Param>(
                "Action.Param",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static Action_Param {
        static instance: ::protobuf::rt::LazyV2<Action_Param> = ::protobuf::rt::LazyV2::INIT;
        instance.get(Action_Param::new)
    }
}

impl ::protobuf::Clear for Action_Param {
    fn clear(&mut self) {
        self.id = 0;
        self.name.clear();
        self.annotations.clear();
        self.bitwidth = 0;
        self.doc.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for Action_Param {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Action_Param {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct ControllerPacketMetadata {
    // message fields
    pub preamble: ::protobuf::SingularPtrField<Preamble>,
    pub metadata: ::protobuf::RepeatedField<ControllerPacketMetadata_Metadata>,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a ControllerPacketMetadata {
    fn default() -> &'a ControllerPacketMetadata {
        <ControllerPacketMetadata as ::protobuf::Message>::default_instance()
    }
}

impl ControllerPacketMetadata {
    pub fn new() -> ControllerPacketMetadata {
        ::std::default::Default::default()
    }

    // .p4.config.v1.Preamble preamble = 1;


    pub fn get_preamble(&self) -> &Preamble {
        self.preamble.as_ref().unwrap_or_else(|| <Preamble as ::protobuf::Message>::default_instance())
    }
    pub fn clear_preamble(&mut self) {
        self.preamble.clear();
    }

    pub fn has_preamble(&self) -> bool {
        self.preamble.is_some()
    }

    // Param is passed by value, moved
    pub fn set_preamble(&mut self, v: Preamble) {
        self.preamble = ::protobuf::SingularPtrField::some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_preamble(&mut self) -> &mut Preamble {
        if self.preamble.is_none() {
            self.preamble.set_default();
        }
        self.preamble.as_mut().unwrap()
    }

    // Take field
    pub fn take_preamble(&mut self) -> Preamble {
        self.preamble.take().unwrap_or_else(|| Preamble::new())
    }

    // repeated .p4.config.v1.ControllerPacketMetadata.Metadata metadata = 2;


    pub fn get_metadata(&self) -> &[ControllerPacketMetadata_Metadata] {
        &self.metadata
    }
    pub fn clear_metadata(&mut self) {
        self.metadata.clear();
    }

    // Param is passed by value, moved
    pub fn set_metadata(&mut self, v: ::protobuf::RepeatedField<ControllerPacketMetadata_Metadata>) {
        self.metadata = v;
    }

    // Mutable pointer to the field.
    pub fn mut_metadata(&mut self) -> &mut ::protobuf::RepeatedField<ControllerPacketMetadata_Metadata> {
        &mut self.metadata
    }

    // Take field
    pub fn take_metadata(&mut self) -> ::protobuf::RepeatedField<ControllerPacketMetadata_Metadata> {
        ::std::mem::replace(&mut self.metadata, ::protobuf::RepeatedField::new())
    }
}

impl ::protobuf::Message for ControllerPacketMetadata {
    fn is_initialized(&self) -> bool {
        for v in &self.preamble {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.metadata {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    ::protobuf::rt::read_singular_message_into(wire_type, is, &mut self.preamble)?;
                },
                2 => {
                    ::protobuf::rt::read_repeated_message_into(wire_type, is, &mut self.metadata)?;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if let Some(ref v) = self.preamble.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        }
        for value in &self.metadata {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint32_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if let Some(ref v) = self.preamble.as_ref() {
            os.write_tag(1, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        }
        for v in &self.metadata {
            os.write_tag(2, ::protobuf::wire_format::WireTypeLengthDelimited)?;
            os.write_raw_varint32(v.get_cached_size())?;
            v.write_to_with_cached_sizes(os)?;
        };
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> ControllerPacketMetadata {
        ControllerPacketMetadata::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_singular_ptr_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<Preamble>>(
                "preamble",
                |m: &ControllerPacketMetadata| { &m.preamble },
                |m: &mut ControllerPacketMetadata| { &mut m.preamble },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeMessage<ControllerPacketMetadata_Metadata>>(
                "metadata",
                |m: &ControllerPacketMetadata| { &m.metadata },
                |m: &mut ControllerPacketMetadata| { &mut m.metadata },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<ControllerPacketMetadata>(
                "ControllerPacketMetadata",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static ControllerPacketMetadata {
        static instance: ::protobuf::rt::LazyV2<ControllerPacketMetadata> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ControllerPacketMetadata::new)
    }
}

impl ::protobuf::Clear for ControllerPacketMetadata {
    fn clear(&mut self) {
        self.preamble.clear();
        self.metadata.clear();
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for ControllerPacketMetadata {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ControllerPacketMetadata {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

#[derive(PartialEq,Clone,Default)]
pub struct ControllerPacketMetadata_Metadata {
    // message fields
    pub id: u32,
    pub name: ::std::string::String,
    pub annotations: ::protobuf::RepeatedField<::std::string::String>,
    pub bitwidth: i32,
    // special fields
    pub unknown_fields: ::protobuf::UnknownFields,
    pub cached_size: ::protobuf::CachedSize,
}

impl<'a> ::std::default::Default for &'a ControllerPacketMetadata_Metadata {
    fn default() -> &'a ControllerPacketMetadata_Metadata {
        <ControllerPacketMetadata_Metadata as ::protobuf::Message>::default_instance()
    }
}

impl ControllerPacketMetadata_Metadata {
    pub fn new() -> ControllerPacketMetadata_Metadata {
        ::std::default::Default::default()
    }

    // uint32 id = 1;


    pub fn get_id(&self) -> u32 {
        self.id
    }
    pub fn clear_id(&mut self) {
        self.id = 0;
    }

    // Param is passed by value, moved
    pub fn set_id(&mut self, v: u32) {
        self.id = v;
    }

    // string name = 2;


    pub fn get_name(&self) -> &str {
        &self.name
    }
    pub fn clear_name(&mut self) {
        self.name.clear();
    }

    // Param is passed by value, moved
    pub fn set_name(&mut self, v: ::std::string::String) {
        self.name = v;
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_name(&mut self) -> &mut ::std::string::String {
        &mut self.name
    }

    // Take field
    pub fn take_name(&mut self) -> ::std::string::String {
        ::std::mem::replace(&mut self.name, ::std::string::String::new())
    }

    // repeated string annotations = 3;


    pub fn get_annotations(&self) -> &[::std::string::String] {
        &self.annotations
    }
    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    // Param is passed by value, moved
    pub fn set_annotations(&mut self, v: ::protobuf::RepeatedField<::std::string::String>) {
        self.annotations = v;
    }

    // Mutable pointer to the field.
    pub fn mut_annotations(&mut self) -> &mut ::protobuf::RepeatedField<::std::string::String> {
        &mut self.annotations
    }

    // Take field
    pub fn take_annotations(&mut self) -> ::protobuf::RepeatedField<::std::string::String> {
        ::std::mem::replace(&mut self.annotations, ::protobuf::RepeatedField::new())
    }

    // int32 bitwidth = 4;


    pub fn get_bitwidth(&self) -> i32 {
        self.bitwidth
    }
    pub fn clear_bitwidth(&mut self) {
        self.bitwidth = 0;
    }

    // Param is passed by value, moved
    pub fn set_bitwidth(&mut self, v: i32) {
        self.bitwidth = v;
    }
}

impl ::protobuf::Message for ControllerPacketMetadata_Metadata {
    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        while !is.eof()? {
            let (field_number, wire_type) = is.read_tag_unpack()?;
            match field_number {
                1 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_uint32()?;
                    self.id = tmp;
                },
                2 => {
                    ::protobuf::rt::read_singular_proto3_string_into(wire_type, is, &mut self.name)?;
                },
                3 => {
                    ::protobuf::rt::read_repeated_string_into(wire_type, is, &mut self.annotations)?;
                },
                4 => {
                    if wire_type != ::protobuf::wire_format::WireTypeVarint {
                        return ::std::result::Result::Err(::protobuf::rt::unexpected_wire_type(wire_type));
                    }
                    let tmp = is.read_int32()?;
                    self.bitwidth = tmp;
                },
                _ => {
                    ::protobuf::rt::read_unknown_or_skip_group(field_number, wire_type, is, self.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u32 {
        let mut my_size = 0;
        if self.id != 0 {
            my_size += ::protobuf::rt::value_size(1, self.id, ::protobuf::wire_format::WireTypeVarint);
        }
        if !self.name.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.name);
        }
        for value in &self.annotations {
            my_size += ::protobuf::rt::string_size(3, &value);
        };
        if self.bitwidth != 0 {
            my_size += ::protobuf::rt::value_size(4, self.bitwidth, ::protobuf::wire_format::WireTypeVarint);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.get_unknown_fields());
        self.cached_size.set(my_size);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::ProtobufResult<()> {
        if self.id != 0 {
            os.write_uint32(1, self.id)?;
        }
        if !self.name.is_empty() {
            os.write_string(2, &self.name)?;
        }
        for v in &self.annotations {
            os.write_string(3, &v)?;
        };
        if self.bitwidth != 0 {
            os.write_int32(4, self.bitwidth)?;
        }
        os.write_unknown_fields(self.get_unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn get_cached_size(&self) -> u32 {
        self.cached_size.get()
    }

    fn get_unknown_fields(&self) -> &::protobuf::UnknownFields {
        &self.unknown_fields
    }

    fn mut_unknown_fields(&mut self) -> &mut ::protobuf::UnknownFields {
        &mut self.unknown_fields
    }

    fn as_any(&self) -> &dyn (::std::any::Any) {
        self as &dyn (::std::any::Any)
    }
    fn as_any_mut(&mut self) -> &mut dyn (::std::any::Any) {
        self as &mut dyn (::std::any::Any)
    }
    fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn (::std::any::Any)> {
        self
    }

    fn descriptor(&self) -> &'static ::protobuf::reflect::MessageDescriptor {
        Self::descriptor_static()
    }

    fn new() -> ControllerPacketMetadata_Metadata {
        ControllerPacketMetadata_Metadata::new()
    }

    fn descriptor_static() -> &'static ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::LazyV2<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::LazyV2::INIT;
        descriptor.get(|| {
            let mut fields = ::std::vec::Vec::new();
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeUint32>(
                "id",
                |m: &ControllerPacketMetadata_Metadata| { &m.id },
                |m: &mut ControllerPacketMetadata_Metadata| { &mut m.id },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "name",
                |m: &ControllerPacketMetadata_Metadata| { &m.name },
                |m: &mut ControllerPacketMetadata_Metadata| { &mut m.name },
            ));
            fields.push(::protobuf::reflect::accessor::make_repeated_field_accessor::<_, ::protobuf::types::ProtobufTypeString>(
                "annotations",
                |m: &ControllerPacketMetadata_Metadata| { &m.annotations },
                |m: &mut ControllerPacketMetadata_Metadata| { &mut m.annotations },
            ));
            fields.push(::protobuf::reflect::accessor::make_simple_field_accessor::<_, ::protobuf::types::ProtobufTypeInt32>(
                "bitwidth",
                |m: &ControllerPacketMetadata_Metadata| { &m.bitwidth },
                |m: &mut ControllerPacketMetadata_Metadata| { &mut m.bitwidth },
            ));
            ::protobuf::reflect::MessageDescriptor::new_pb_name::<ControllerPacketMetadata_Metadata>(
                "ControllerPacketMetadata.Metadata",
                fields,
                file_descriptor_proto()
            )
        })
    }

    fn default_instance() -> &'static ControllerPacketMetadata_Metadata {
        static instance: ::protobuf::rt::LazyV2<ControllerPacketMetadata_Metadata> = ::protobuf::rt::LazyV2::INIT;
        instance.get(ControllerPacketMetadata_Metadata::new)
    }
}

impl ::protobuf::Clear for ControllerPacketMetadata_Metadata {
    fn clear(&mut self) {
        self.id = 0;
        self.name.clear();
        self.annotations.clear();
        self.bitwidth = 0;
        self.unknown_fields.clear();
    }
}

impl ::std::fmt::Debug for ControllerPacketMetadata_Metadata {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ControllerPacketMetadata_Metadata {
    fn as_ref(&self) -> ::protobuf::reflect::ReflectValueRef {
        ::protobuf::reflect::ReflectValueRef::Message(self)
    }
}

static file_descriptor_proto_data: &'static [u8] = b"\
    \n\x19p4/config/v1/p4info.proto\x12\x0cp4.config.v1\"\x87\x02\n\x06P4Inf\
    o\x122\n\x08pkg_info\x18\x01\x20\x01(\x0b2\x15.p4.config.v1.PkgInfoR\x07\
    pkgInfoB\0\x12-\n\x06tables\x18\x02\x20\x03(\x0b2\x13.p4.config.v1.Table\
    R\x06tablesB\0\x120\n\x07actions\x18\x03\x20\x03(\x0b2\x14.p4.config.v1.\
    ActionR\x07actionsB\0\x12f\n\x1acontroller_packet_metadata\x18\t\x20\x03\
    (\x0b2&.p4.config.v1.ControllerPacketMetadataR\x18controllerPacketMetada\
    taB\0:\0\"M\n\rDocumentation\x12\x16\n\x05brief\x18\x01\x20\x01(\tR\x05b\
    riefB\0\x12\"\n\x0bdescription\x18\x02\x20\x01(\tR\x0bdescriptionB\0:\0\
    \"\xfe\x01\n\x07PkgInfo\x12\x14\n\x04name\x18\x01\x20\x01(\tR\x04nameB\0\
    \x12\x1a\n\x07version\x18\x02\x20\x01(\tR\x07versionB\0\x12/\n\x03doc\
    \x18\x03\x20\x01(\x0b2\x1b.p4.config.v1.DocumentationR\x03docB\0\x12\"\n\
    \x0bannotations\x18\x04\x20\x03(\tR\x0bannotationsB\0\x12\x14\n\x04arch\
    \x18\x05\x20\x01(\tR\x04archB\0\x12$\n\x0corganization\x18\x06\x20\x01(\
    \tR\x0corganizationB\0\x12\x1a\n\x07contact\x18\x07\x20\x01(\tR\x07conta\
    ctB\0\x12\x12\n\x03url\x18\x08\x20\x01(\tR\x03urlB\0:\0\"\xa1\x01\n\x08P\
    reamble\x12\x10\n\x02id\x18\x01\x20\x01(\rR\x02idB\0\x12\x14\n\x04name\
    \x18\x02\x20\x01(\tR\x04nameB\0\x12\x16\n\x05alias\x18\x03\x20\x01(\tR\
    \x05aliasB\0\x12\"\n\x0bannotations\x18\x04\x20\x03(\tR\x0bannotationsB\
    \0\x12/\n\x03doc\x18\x05\x20\x01(\x0b2\x1b.p4.config.v1.DocumentationR\
    \x03docB\0:\0\"\x81\x03\n\nMatchField\x12\x10\n\x02id\x18\x01\x20\x01(\r\
    R\x02idB\0\x12\x14\n\x04name\x18\x02\x20\x01(\tR\x04nameB\0\x12\"\n\x0ba\
    nnotations\x18\x03\x20\x03(\tR\x0bannotationsB\0\x12\x1c\n\x08bitwidth\
    \x18\x04\x20\x01(\x05R\x08bitwidthB\0\x12E\n\nmatch_type\x18\x05\x20\x01\
    (\x0e2\".p4.config.v1.MatchField.MatchTypeH\0R\tmatchTypeB\0\x12,\n\x10o\
    ther_match_type\x18\x07\x20\x01(\tH\0R\x0eotherMatchTypeB\0\x12/\n\x03do\
    c\x18\x06\x20\x01(\x0b2\x1b.p4.config.v1.DocumentationR\x03docB\0\"X\n\t\
    MatchType\x12\x0f\n\x0bUNSPECIFIED\x10\0\x12\t\n\x05EXACT\x10\x02\x12\
    \x07\n\x03LPM\x10\x03\x12\x0b\n\x07TERNARY\x10\x04\x12\t\n\x05RANGE\x10\
    \x05\x12\x0c\n\x08OPTIONAL\x10\x06\x1a\0B\x07\n\x05match:\0\"\xae\x04\n\
    \x05Table\x124\n\x08preamble\x18\x01\x20\x01(\x0b2\x16.p4.config.v1.Prea\
    mbleR\x08preambleB\0\x12=\n\x0cmatch_fields\x18\x02\x20\x03(\x0b2\x18.p4\
    .config.v1.MatchFieldR\x0bmatchFieldsB\0\x12:\n\x0baction_refs\x18\x03\
    \x20\x03(\x0b2\x17.p4.config.v1.ActionRefR\nactionRefsB\0\x127\n\x17cons\
    t_default_action_id\x18\x04\x20\x01(\rR\x14constDefaultActionIdB\0\x12-\
    \n\x11implementation_id\x18\x06\x20\x01(\rR\x10implementationIdB\0\x120\
    \n\x13direct_resource_ids\x18\x07\x20\x03(\rR\x11directResourceIdsB\0\
    \x12\x14\n\x04size\x18\x08\x20\x01(\x03R\x04sizeB\0\x12]\n\x15idle_timeo\
    ut_behavior\x18\t\x20\x01(\x0e2'.p4.config.v1.Table.IdleTimeoutBehaviorR\
    \x13idleTimeoutBehaviorB\0\x12&\n\x0eis_const_table\x18\n\x20\x01(\x08R\
    \x0cisConstTableB\0\";\n\x13IdleTimeoutBehavior\x12\x0e\n\nNO_TIMEOUT\
    \x10\0\x12\x12\n\x0eNOTIFY_CONTROL\x10\x01\x1a\0:\0\"\xbe\x01\n\tActionR\
    ef\x12\x10\n\x02id\x18\x01\x20\x01(\rR\x02idB\0\x125\n\x05scope\x18\x03\
    \x20\x01(\x0e2\x1d.p4.config.v1.ActionRef.ScopeR\x05scopeB\0\x12\"\n\x0b\
    annotations\x18\x02\x20\x03(\tR\x0bannotationsB\0\"B\n\x05Scope\x12\x15\
    \n\x11TABLE_AND_DEFAULT\x10\0\x12\x0e\n\nTABLE_ONLY\x10\x01\x12\x10\n\
    \x0cDEFAULT_ONLY\x10\x02\x1a\0:\0\"\x9d\x02\n\x06Action\x124\n\x08preamb\
    le\x18\x01\x20\x01(\x0b2\x16.p4.config.v1.PreambleR\x08preambleB\0\x124\
    \n\x06params\x18\x02\x20\x03(\x0b2\x1a.p4.config.v1.Action.ParamR\x06par\
    amsB\0\x1a\xa4\x01\n\x05Param\x12\x10\n\x02id\x18\x01\x20\x01(\rR\x02idB\
    \0\x12\x14\n\x04name\x18\x02\x20\x01(\tR\x04nameB\0\x12\"\n\x0bannotatio\
    ns\x18\x03\x20\x03(\tR\x0bannotationsB\0\x12\x1c\n\x08bitwidth\x18\x04\
    \x20\x01(\x05R\x08bitwidthB\0\x12/\n\x03doc\x18\x05\x20\x01(\x0b2\x1b.p4\
    .config.v1.DocumentationR\x03docB\0:\0:\0\"\x99\x02\n\x18ControllerPacke\
    tMetadata\x124\n\x08preamble\x18\x01\x20\x01(\x0b2\x16.p4.config.v1.Prea\
    mbleR\x08preambleB\0\x12M\n\x08metadata\x18\x02\x20\x03(\x0b2/.p4.config\
    .v1.ControllerPacketMetadata.MetadataR\x08metadataB\0\x1av\n\x08Metadata\
    \x12\x10\n\x02id\x18\x01\x20\x01(\rR\x02idB\0\x12\x14\n\x04name\x18\x02\
    \x20\x01(\tR\x04nameB\0\x12\"\n\x0bannotations\x18\x03\x20\x03(\tR\x0ban\
    notationsB\0\x12\x1c\n\x08bitwidth\x18\x04\x20\x01(\x05R\x08bitwidthB\0:\
    \0:\0B\0b\x06proto3\
";

static file_descriptor_proto_lazy: ::protobuf::rt::LazyV2<::protobuf::descriptor::FileDescriptorProto> = ::protobuf::rt::LazyV2::INIT;

fn parse_descriptor_proto() -> ::protobuf::descriptor::FileDescriptorProto {
    ::protobuf::Message::parse_from_bytes(file_descriptor_proto_data).unwrap()
}

pub fn file_descriptor_proto() -> &'static ::protobuf::descriptor::FileDescriptorProto {
    file_descriptor_proto_lazy.get(|| {
        parse_descriptor_proto()
    })
}
