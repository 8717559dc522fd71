pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod function {
        pub mod function;
        pub mod functionerror;
        pub mod functions;
        pub mod integration;

        pub mod basic {
            pub mod exp;
            pub mod identity;
            pub mod logarithm;
            pub mod trigonometricfunction;
        }

        pub mod meta {
            pub mod composition;
            pub mod mult;
            pub mod power;
            pub mod scale;
            pub mod shift;
            pub mod sum;
        }
    }

    pub mod tabulated {
        pub mod functionpoint;
        pub mod tabulatedfunction;
        pub mod arraytabulatedfunction;
        pub mod linkedlisttabulatedfunction;
        pub mod tabulatedfunctionfactory;
        pub mod backendmanager;
        pub mod tabulatedfunctions;
        pub mod persistence;
    }
}
