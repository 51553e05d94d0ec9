use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::Path;
use tessel_markup::{Child, Node, Part, PropMap, PropSource, Tag, Tree};

use crate::CodegenOptions;

/// Tokens for a whole parse result. A single element root becomes its own
/// `VNode`; a fragment becomes a `Vec` of children.
pub fn emit_tree<V: ToTokens>(tree: &Tree<V>, opts: &CodegenOptions) -> TokenStream {
    match tree {
        Tree::Single(Child::Node(node)) => emit_node(node, opts),
        Tree::Single(child) => emit_child(child, opts),
        Tree::Fragment(children) => {
            let items = children.iter().map(|c| emit_child(c, opts));
            quote!(::std::vec![#(#items),*])
        }
    }
}

pub fn emit_child<V: ToTokens>(child: &Child<V>, opts: &CodegenOptions) -> TokenStream {
    let rt = &opts.runtime;
    let inner = match child {
        Child::Node(node) => emit_node(node, opts),
        Child::Text(text) => quote!(#text),
        Child::Field(expr) => quote!(#expr),
    };
    quote!(#rt::Child::from(#inner))
}

/// `VNode { tag, props, children, key }` for one element.
pub fn emit_node<V: ToTokens>(node: &Node<V>, opts: &CodegenOptions) -> TokenStream {
    let rt = &opts.runtime;
    let tag = match &node.tag {
        Tag::Name(name) => quote!(#name),
        Tag::Field(expr) => quote!(#expr),
    };
    let props = emit_props(&node.props, rt);
    let children = node.children.iter().map(|c| emit_child(c, opts));
    let key = match node.prop("key") {
        Some(parts) => {
            let value = emit_prop_value(parts);
            quote!(::core::option::Option::Some(#value))
        }
        None => quote!(::core::option::Option::None),
    };
    quote! {
        #rt::VNode {
            tag: ::core::convert::Into::into(#tag),
            props: #props,
            children: ::std::vec![#(#children),*],
            key: #key,
        }
    }
}

/// Collapse the prop sources: nothing is the default props, one source is
/// used as is, several are merged in order.
pub fn emit_props<V: ToTokens>(props: &[PropSource<V>], rt: &Path) -> TokenStream {
    let sources: Vec<TokenStream> = props.iter().map(|s| emit_prop_source(s, rt)).collect();
    match sources.as_slice() {
        [] => quote!(::core::default::Default::default()),
        [single] => single.clone(),
        many => quote!(#rt::Props::merge([#(#many),*])),
    }
}

fn emit_prop_source<V: ToTokens>(source: &PropSource<V>, rt: &Path) -> TokenStream {
    match source {
        PropSource::Named(map) => emit_prop_map(map, rt),
        PropSource::Spread(expr) => quote!(::core::convert::Into::into(#expr)),
    }
}

fn emit_prop_map<V: ToTokens>(map: &PropMap<V>, rt: &Path) -> TokenStream {
    let entries = map.iter().map(|(name, parts)| {
        let value = emit_prop_value(parts);
        quote!((#name, #value))
    });
    quote!(#rt::Props::from([#(#entries),*]))
}

/// A one-part value keeps its own type; several parts are joined with
/// `format!`, literal parts going into the format string.
pub fn emit_prop_value<V: ToTokens>(parts: &[Part<V>]) -> TokenStream {
    if let [single] = parts {
        let inner = match single {
            Part::Text(text) => quote!(#text),
            Part::Field(expr) => quote!(#expr),
            Part::True => quote!(true),
        };
        return quote!(::core::convert::Into::into(#inner));
    }

    let mut format = String::new();
    let mut args = Vec::new();
    for part in parts {
        match part {
            Part::Text(text) => format.push_str(&text.replace('{', "{{").replace('}', "}}")),
            Part::True => format.push_str("true"),
            Part::Field(expr) => {
                format.push_str("{}");
                args.push(expr);
            }
        }
    }
    quote!(::core::convert::Into::into(::std::format!(#format #(, #args)*)))
}
